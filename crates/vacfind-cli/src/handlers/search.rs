use anyhow::{Context, Result, bail};
use tracing::{debug, info};
use vacfind_runtime::{Config, HttpLookup, SearchSession};

use crate::args::SearchArgs;
use crate::export;
use crate::presentation::presenters::{self, SearchDisplay};
use crate::presentation::view_models::ExportViewModel;
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;

pub async fn handle(
    args: &SearchArgs,
    config: &Config,
    api_url: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let lookup = HttpLookup::from_config(api_url, config)?;
    debug!(endpoint = lookup.endpoint(), "lookup endpoint resolved");

    let mut session = SearchSession::new().with_timeout(config.timeout());
    session.submit(&args.raw_query(), &lookup).await;

    if let Some(message) = session.failure_message() {
        bail!(message);
    }

    // Header clicks, applied in the order a user would make them
    let mut unmatched = Vec::new();
    for country in &args.expand {
        let present = session
            .results()
            .is_some_and(|results| results.group(country).is_some());
        if present {
            session.toggle_country(country);
        } else {
            debug!(country = %country, "ignoring expand for a country without results");
            unmatched.push(country.clone());
        }
    }
    if args.expand_all {
        session.expand_all();
    }
    for column in &args.sort {
        session.click_sort_all((*column).into());
    }

    let criteria = session
        .criteria()
        .context("search finished without criteria")?;
    let results = session
        .results()
        .context("search finished without results")?;

    let export = match &args.export {
        Some(path) => {
            let rows = export::write_csv_file(path, results, session.sorts())?;
            info!(path = %path.display(), rows, "exported results");
            Some(ExportViewModel {
                path: path.display().to_string(),
                rows,
            })
        }
        None => None,
    };

    let view_model = presenters::present_search_results(
        SearchDisplay {
            criteria,
            results,
            expansion: session.expansion(),
            sorts: session.sorts(),
        },
        &unmatched,
        export,
    );
    ConsoleRenderer::new(format).render(view_model)
}
