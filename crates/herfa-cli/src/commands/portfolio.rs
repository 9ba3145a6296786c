use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};

use herfa_application::Herfa;
use herfa_core::format::format_file_size;
use herfa_core::models::Id;
use herfa_core::validate::validate_image_file;
use herfa_infrastructure::upload::load_upload;

const MAX_IMAGE_MB: u64 = 5;

pub async fn upload(
    herfa: &Herfa,
    worker_id: Id,
    files: &[PathBuf],
    descriptions: &[String],
) -> Result<()> {
    let mut images = Vec::with_capacity(files.len());
    for path in files {
        let image =
            load_upload(path).with_context(|| format!("Failed to read {}", path.display()))?;
        validate_image_file(Some(&image), MAX_IMAGE_MB)
            .map_err(|message| anyhow!("{}: {}", path.display(), message))?;
        println!("{} ({})", image.file_name, format_file_size(image.size()));
        images.push(image);
    }

    let items = herfa
        .portfolio()
        .upload_many(worker_id, images, descriptions)
        .await?;
    for item in &items {
        let url = herfa
            .portfolio()
            .image_url(Some(item.image_url.as_str()))
            .unwrap_or_default();
        println!("#{} {}", item.id, url);
    }
    Ok(())
}
