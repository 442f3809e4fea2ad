use crate::config::OutputFormat;
use crate::core::lookup::PrefixGroup;
use crate::domain::model::Term;
use crate::utils::error::Result;
use serde::Serialize;

#[derive(Serialize)]
struct GroupRow<'a> {
    prefix: &'a str,
    count: usize,
    terms: &'a [Term],
}

pub fn render_groups(groups: &[PrefixGroup<'_>], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let rows: Vec<GroupRow<'_>> = groups
                .iter()
                .map(|g| GroupRow {
                    prefix: g.prefix,
                    count: g.terms.len(),
                    terms: g.terms,
                })
                .collect();
            Ok(serde_json::to_string_pretty(&rows)?)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for group in groups {
                out.push_str(&format!("[{}] {} terms\n", group.prefix, group.terms.len()));
                for term in group.terms {
                    out.push_str(&format!("  {}\n", term));
                }
            }
            Ok(out)
        }
    }
}

pub fn render_matches(matches: &[Term], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(matches)?),
        OutputFormat::Text => {
            let mut out = String::new();
            for term in matches {
                out.push_str(&format!("{}\n", term));
            }
            Ok(out)
        }
    }
}
