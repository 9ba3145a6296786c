use anyhow::Result;

use herfa_application::Herfa;
use herfa_core::models::Area;
use herfa_core::models::profession;

pub async fn professions(herfa: &Herfa, refresh: bool, search: Option<&str>) -> Result<()> {
    let all = herfa.professions().with_cache(refresh).await?;
    let shown = match search {
        Some(query) => profession::search(&all, query),
        None => all,
    };
    for p in &shown {
        let marker = if p.is_active { "" } else { " (غير نشطة)" };
        println!("{:>4}  {}{}", p.id, p.name, marker);
    }
    Ok(())
}

pub async fn neighborhoods(herfa: &Herfa, refresh: bool, area: Option<Area>) -> Result<()> {
    let all = herfa.neighborhoods().with_cache(refresh).await?;
    for n in all.iter().filter(|n| area.is_none_or(|a| n.area == a)) {
        println!("{:>4}  {}  [{}]", n.id, n.name, n.area.as_str());
    }
    Ok(())
}
