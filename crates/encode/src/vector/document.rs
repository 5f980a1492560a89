use serde::Serialize;
use tinytemplate::TinyTemplate;
use tinytemplate::format_unescaped;

use crate::error::Result;
use crate::render;
use crate::vector::config::RenderConfig;
use crate::vector::element::Coord;
use crate::vector::element::Element;

const TEMPLATE_NAME: &str = "svg";
const SVG_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{width}" height="{height}" viewBox="0 0 {width} {height}">
{body}</svg>
"#;

#[derive(Serialize)]
struct Context {
    width: String,
    height: String,
    body: String,
}

/// Renders the elements, in order, into a standalone SVG document.
pub(crate) fn render(config: &RenderConfig, elements: &[Element]) -> Result<String> {
    let mut template = TinyTemplate::new();
    // Element text is escaped while rendering the elements.
    template.set_default_formatter(&format_unescaped);
    template.add_template(TEMPLATE_NAME, SVG_TEMPLATE)?;

    let context = Context {
        width: Coord(config.width).to_string(),
        height: Coord(config.height).to_string(),
        body: render::to_string(elements)?,
    };

    let document = template.render(TEMPLATE_NAME, &context)?;
    Ok(document)
}
