// SPDX-FileCopyrightText: 2026 Costscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal and JSON rendering of estimates, profiles and catalogs.

use std::io::{self, Write};

use colored::Colorize;
use costscope_core::{ComponentKind, ComponentSelection, UsageProfile};
use costscope_cost::{CostBreakdown, PriceCatalog};
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::sources::NamedProfile;

/// Full estimate for one customer, as printed by `costscope estimate --json`.
#[derive(Debug, Serialize)]
pub struct EstimateReport<'a> {
    pub customer: &'a str,
    pub usage: &'a UsageProfile,
    pub selection: &'a ComponentSelection,
    pub breakdown: &'a CostBreakdown,
}

/// One line of `costscope estimate --all`.
#[derive(Debug, Serialize)]
pub struct SummaryRow<'a> {
    pub customer: &'a str,
    pub monthly_recurring_cost: f64,
    pub one_time_ingestion_cost: f64,
}

/// Dollar amount with cents, or more digits for sub-cent figures.
pub fn format_usd(amount: f64) -> String {
    if amount != 0.0 && amount.abs() < 0.01 {
        format!("${amount:.6}")
    } else {
        format!("${amount:.2}")
    }
}

/// Quantities print without a fractional part when they have none.
fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

pub fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

fn heading(out: &mut impl Write, title: &str, use_color: bool) -> io::Result<()> {
    writeln!(out)?;
    if use_color {
        writeln!(out, "  {}", title.bold())?;
    } else {
        writeln!(out, "  {title}")?;
    }
    writeln!(out, "  {}", "-".repeat(44))
}

fn line(out: &mut impl Write, label: &str, amount: f64) -> io::Result<()> {
    writeln!(out, "    {label:<30}{:>14}", format_usd(amount))
}

fn total(out: &mut impl Write, label: &str, amount: f64, use_color: bool) -> io::Result<()> {
    let value = format!("{:>14}", format_usd(amount));
    if use_color {
        writeln!(out, "  {:<32}{}", label.bold(), value.green().bold())
    } else {
        writeln!(out, "  {label:<32}{value}")
    }
}

/// Per-group breakdown and the two headline totals.
pub fn write_estimate(
    out: &mut impl Write,
    report: &EstimateReport<'_>,
    use_color: bool,
) -> io::Result<()> {
    let b = report.breakdown;

    heading(out, &format!("costscope estimate: {}", report.customer), use_color)?;
    let u = report.usage;
    writeln!(
        out,
        "    pages {}  audio min {}  images {}  conversations/month {}",
        format_quantity(u.pages),
        format_quantity(u.audio_minutes),
        format_quantity(u.images),
        format_quantity(u.conversations_per_month),
    )?;
    for kind in ComponentKind::iter() {
        writeln!(out, "    {:<18}{}", kind.to_string(), report.selection.provider(kind))?;
    }

    heading(out, "One-time ingestion", use_color)?;
    line(out, "documents to text", b.media_to_text.documents_to_text)?;
    line(out, "audio to text", b.media_to_text.audio_to_text)?;
    line(out, "image captioning", b.media_to_text.image_captioning)?;
    line(out, "face recognition", b.media_to_text.face_recognition)?;
    line(out, "embedding (documents)", b.embedding.text)?;
    line(out, "embedding (audio)", b.embedding.audio)?;
    line(out, "embedding (images)", b.embedding.image)?;
    line(out, "RAG writes", b.rag.write_one_time)?;
    line(out, "blob writes", b.blob.write_one_time)?;
    total(out, "one-time ingestion cost", b.one_time_ingestion_cost, use_color)?;

    heading(out, "Monthly recurring", use_color)?;
    line(out, "LLM inference", b.llm.total)?;
    line(out, "RAG storage", b.rag.storage_per_month)?;
    line(out, "RAG reads", b.rag.read_per_month)?;
    line(out, "blob storage", b.blob.storage_per_month)?;
    line(out, "blob reads", b.blob.read_per_month)?;
    total(out, "monthly recurring cost", b.monthly_recurring_cost, use_color)?;
    writeln!(out)
}

/// One line per customer with the two headline totals.
pub fn write_summary(
    out: &mut impl Write,
    rows: &[SummaryRow<'_>],
    use_color: bool,
) -> io::Result<()> {
    let header = format!("  {:<20}{:>16}{:>18}", "customer", "monthly", "one-time");
    if use_color {
        writeln!(out, "{}", header.bold())?;
    } else {
        writeln!(out, "{header}")?;
    }
    for row in rows {
        writeln!(
            out,
            "  {:<20}{:>16}{:>18}",
            row.customer,
            format_usd(row.monthly_recurring_cost),
            format_usd(row.one_time_ingestion_cost),
        )?;
    }
    Ok(())
}

/// Customer usage table, with the derived file count.
pub fn write_profiles(
    out: &mut impl Write,
    profiles: &[NamedProfile],
    use_color: bool,
) -> io::Result<()> {
    let header = format!(
        "  {:<20}{:>10}{:>11}{:>9}{:>10}{:>15}",
        "customer", "pages", "audio_min", "images", "files", "conversations"
    );
    if use_color {
        writeln!(out, "{}", header.bold())?;
    } else {
        writeln!(out, "{header}")?;
    }
    for p in profiles {
        let u = &p.usage;
        writeln!(
            out,
            "  {:<20}{:>10}{:>11}{:>9}{:>10}{:>15}",
            p.customer,
            format_quantity(u.pages),
            format_quantity(u.audio_minutes),
            format_quantity(u.images),
            format_quantity(u.files()),
            format_quantity(u.conversations_per_month),
        )?;
    }
    Ok(())
}

/// Providers and their rates, for one kind or every kind.
pub fn write_providers(
    out: &mut impl Write,
    catalog: &PriceCatalog,
    kind: Option<ComponentKind>,
    use_color: bool,
) -> io::Result<()> {
    let kinds: Vec<ComponentKind> = match kind {
        Some(kind) => vec![kind],
        None => ComponentKind::iter().collect(),
    };
    for kind in kinds {
        heading(out, &kind.to_string(), use_color)?;
        let mut any = false;
        for (provider, card) in catalog.providers(kind) {
            any = true;
            writeln!(out, "    {provider}")?;
            for (name, value) in card.iter() {
                writeln!(out, "      {name:<28}{value}")?;
            }
        }
        if !any {
            writeln!(out, "    (no providers)")?;
        }
    }
    writeln!(out)
}
