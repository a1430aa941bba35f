use anyhow::Result;

use crate::client::{ContainerSummary, DynEngineApi};

use super::util::render_table;

pub(crate) async fn handle_ps(api: &DynEngineApi, all: bool) -> Result<()> {
    let containers = api.list_containers(all).await?;
    println!("{}", render_containers(&containers));
    Ok(())
}

pub(crate) fn render_containers(containers: &[ContainerSummary]) -> String {
    let rows: Vec<Vec<String>> = containers
        .iter()
        .map(|c| {
            vec![
                c.short_id().to_string(),
                c.image.clone(),
                c.status.clone(),
                c.display_names(),
            ]
        })
        .collect();

    render_table(&["CONTAINER ID", "IMAGE", "STATUS", "NAMES"], &rows)
}
