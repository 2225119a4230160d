use quick_xml::escape::escape;
use stockquote_lib::{PanelContent, PriceColor, QuotePanel, RenderTarget};
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Html,
    Json,
}

#[derive(Tabled)]
struct QuoteRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// Prints every panel state to stdout in the chosen format.
pub struct PanelPrinter {
    format: OutputFormat,
}

impl PanelPrinter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl RenderTarget for PanelPrinter {
    fn render(&self, content: &PanelContent) {
        match render_panel(content, &self.format) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
        }
    }
}

pub fn render_panel(
    content: &PanelContent,
    format: &OutputFormat,
) -> Result<String, serde_json::Error> {
    Ok(match format {
        OutputFormat::Table => render_table(content),
        OutputFormat::Html => render_html(content),
        OutputFormat::Json => serde_json::to_string_pretty(content)?,
    })
}

// -- Table output --

fn build_quote_rows(panel: &QuotePanel) -> Vec<QuoteRow> {
    panel
        .rows()
        .into_iter()
        .map(|(field, value)| QuoteRow {
            field,
            value: if field == "Price" {
                price_with_trend(value, panel.price_color)
            } else {
                value.to_string()
            },
        })
        .collect()
}

fn price_with_trend(price: &str, color: PriceColor) -> String {
    match color {
        PriceColor::Positive => format!("{} (up)", price),
        PriceColor::Negative => format!("{} (down)", price),
        PriceColor::Neutral => price.to_string(),
    }
}

fn render_table(content: &PanelContent) -> String {
    match content {
        PanelContent::Quote(panel) => format!(
            "{}\n{}",
            panel.company_name,
            Table::new(build_quote_rows(panel))
        ),
        other => other.message().unwrap_or_default(),
    }
}

// -- HTML output --

fn render_html(content: &PanelContent) -> String {
    let PanelContent::Quote(panel) = content else {
        return escape(content.message().unwrap_or_default().as_str()).into_owned();
    };

    let mut html = format!(
        "<b style=\"text-align: center;\"><u>{}</u></b>\n",
        escape(panel.company_name.as_str())
    );
    for (label, value) in panel.rows() {
        let value = escape(value);
        if label == "Price" {
            html.push_str(&format!(
                "<p><strong>{}:</strong> <span style=\"color:{};\">{}</span></p>\n",
                label,
                panel.price_color.css_color(),
                value
            ));
        } else {
            html.push_str(&format!("<p><strong>{}:</strong> {}</p>\n", label, value));
        }
    }
    html.truncate(html.trim_end().len());
    html
}
