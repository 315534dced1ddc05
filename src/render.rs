use tera::{Context, Tera};

use crate::error::Error;
use crate::pagination::PaginationResult;

/// Name of the navigation partial inside a Tera instance.
pub const NAV_TEMPLATE: &str = "pagination/nav.html";

const NAV_SOURCE: &str = include_str!("../templates/pagination/nav.html");

/// Add the navigation partial to a host's Tera instance so page templates
/// can `{% include "pagination/nav.html" %}` with a `pagination` variable.
pub fn register_templates(tera: &mut Tera) -> Result<(), Error> {
    tera.add_raw_template(NAV_TEMPLATE, NAV_SOURCE)?;
    Ok(())
}

/// Standalone renderer for the navigation partial.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> Result<Self, Error> {
        let mut tera = Tera::default();
        register_templates(&mut tera)?;
        Ok(Self { tera })
    }

    pub fn render(&self, pagination: &PaginationResult) -> Result<String, Error> {
        let mut ctx = Context::new();
        ctx.insert("pagination", pagination);
        Ok(self.tera.render(NAV_TEMPLATE, &ctx)?)
    }
}
