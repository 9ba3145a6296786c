use anyhow::Result;

use herfa_application::Herfa;
use herfa_core::format::{format_experience, format_phone_number, format_rating_stars};
use herfa_core::models::{Area, Id, Paginated, Worker, WorkerSearchParams};

pub struct SearchFilter {
    pub profession: Option<Id>,
    pub neighborhood: Option<Id>,
    pub area: Option<Area>,
    pub available: bool,
    pub min_rating: Option<f64>,
    pub query: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl From<SearchFilter> for WorkerSearchParams {
    fn from(filter: SearchFilter) -> Self {
        WorkerSearchParams {
            profession_id: filter.profession,
            neighborhood_id: filter.neighborhood,
            area: filter.area,
            is_available: filter.available.then_some(true),
            min_rating: filter.min_rating,
            search: filter.query,
            page: filter.page,
            limit: filter.limit,
            ..Default::default()
        }
    }
}

pub async fn search(herfa: &Herfa, filter: SearchFilter) -> Result<()> {
    let page = herfa.workers().search(&filter.into()).await?;
    print_page(&page);
    Ok(())
}

pub async fn top(herfa: &Herfa, limit: u32) -> Result<()> {
    let page = herfa.workers().top_rated(limit).await?;
    print_page(&page);
    Ok(())
}

pub async fn show(herfa: &Herfa, id: Id) -> Result<()> {
    let worker = herfa.workers().get(id).await?;
    println!("{}", summary_line(&worker));
    println!("  الخبرة: {}", format_experience(worker.experience_years));
    if let Some(phone) = &worker.contact_phone {
        println!("  الهاتف: {}", format_phone_number(phone));
    }
    if let Some(bio) = &worker.bio {
        println!("  {}", bio);
    }
    if let Some(url) = herfa.workers().profile_image_url(worker.profile_image.as_deref()) {
        println!("  الصورة: {}", url);
    }
    Ok(())
}

fn print_page(page: &Paginated<Worker>) {
    for worker in &page.data {
        println!("{}", summary_line(worker));
    }
    println!(
        "-- page {}/{} ({} total)",
        page.meta.page, page.meta.total_pages, page.meta.total
    );
}

fn summary_line(worker: &Worker) -> String {
    let name = worker.user.as_ref().map(|u| u.name.as_str()).unwrap_or("-");
    let profession = worker
        .profession
        .as_ref()
        .map(|p| p.name.as_str())
        .unwrap_or("-");
    let availability = if worker.is_available { "متاح" } else { "غير متاح" };
    format!(
        "#{} {} | {} | {} | {}",
        worker.id,
        name,
        profession,
        format_rating_stars(worker.average_rating, true),
        availability
    )
}
