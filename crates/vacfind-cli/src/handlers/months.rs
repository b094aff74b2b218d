use anyhow::Result;

use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;

pub fn handle(format: OutputFormat) -> Result<()> {
    let view_model = presenters::present_months();
    ConsoleRenderer::new(format).render(view_model)
}
