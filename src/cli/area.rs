//! One-shot area commands

use anyhow::{Context, Result};
use serde_json::json;

use super::input::ShapeSpec;
use super::output::{format_area, Output};
use super::session::EXPLANATION;
use crate::config::Config;
use crate::domain::{compute_area, ShapeCollection};

/// Prints the area of a single shape
pub fn area(output: &Output, config: &Config, spec: &ShapeSpec) -> Result<()> {
    let shape = spec
        .build(&config.defaults)
        .context("Cannot build shape")?;
    let area = compute_area(&shape);
    output.verbose_ctx("area", &format!("{:?} => {}", shape, area));

    if output.is_json() {
        output.data(&json!({
            "shape": shape,
            "description": shape.to_string(),
            "area": area,
        }));
    } else {
        println!("Area for {} = {} units²", shape, format_area(area));
    }

    Ok(())
}

/// Prints every shape's area followed by the total
///
/// With no specs the demo collection is used, unless disabled in config.
pub fn total(output: &Output, config: &Config, specs: &[ShapeSpec]) -> Result<()> {
    let collection = if specs.is_empty() {
        if config.preload_demo {
            output.verbose_ctx("total", "No shapes given, using demo shapes");
            ShapeCollection::demo()?
        } else {
            ShapeCollection::new()
        }
    } else {
        specs
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                spec.build(&config.defaults)
                    .with_context(|| format!("Cannot build shape #{}", i + 1))
            })
            .collect::<Result<ShapeCollection>>()?
    };

    let report = collection.total_area();
    output.verbose_ctx("total", &format!("Summed {} shape(s)", report.entries.len()));

    if output.is_json() {
        output.data(&report);
    } else {
        for entry in &report.entries {
            println!(
                "{}\t{} => {} units²",
                entry.id,
                entry.description,
                format_area(entry.area)
            );
        }
        println!("Σ Total area = {} units²", format_area(report.total));
    }

    Ok(())
}

/// Prints how areas are dispatched
pub fn explain(output: &Output) -> Result<()> {
    if output.is_json() {
        output.data(&json!({ "lines": EXPLANATION }));
    } else {
        for line in EXPLANATION {
            println!("{}", line);
        }
    }
    Ok(())
}
