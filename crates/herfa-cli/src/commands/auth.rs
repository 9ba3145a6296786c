use anyhow::{Result, bail};

use herfa_application::Herfa;
use herfa_core::format::{format_phone_number, format_user_role};
use herfa_core::models::User;
use herfa_core::validate::validate_login_form;

pub async fn login(herfa: &Herfa, identifier: &str, password: &str) -> Result<()> {
    let errors = validate_login_form(identifier, password);
    if !errors.is_valid() {
        for (field, message) in errors.fields() {
            eprintln!("{}: {}", field, message);
        }
        bail!("invalid login form");
    }

    let response = herfa.auth().login(identifier, password).await?;
    match response.user.or_else(|| herfa.auth().current_user()) {
        Some(user) => println!("تم تسجيل الدخول: {}", user.name),
        None if herfa.auth().is_authenticated() => println!("تم تسجيل الدخول"),
        None => bail!("login response carried no token"),
    }
    Ok(())
}

pub async fn logout(herfa: &Herfa) -> Result<()> {
    herfa.auth().logout().await?;
    println!("تم تسجيل الخروج");
    Ok(())
}

pub async fn profile(herfa: &Herfa) -> Result<()> {
    let user = herfa.auth().profile().await?;
    print_user(&user);
    Ok(())
}

fn print_user(user: &User) {
    println!("#{} {} ({})", user.id, user.name, format_user_role(user.role));
    if let Some(phone) = &user.phone {
        println!("  الهاتف: {}", format_phone_number(phone));
    }
    if let Some(email) = &user.email {
        println!("  البريد: {}", email);
    }
}
