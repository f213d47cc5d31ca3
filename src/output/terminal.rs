//! Terminal report formatting with colors.

use colored::Colorize;

use crate::analysis::Strength;
use crate::ninebox::TalentTier;
use crate::result::{CohortReport, DimensionReport};

/// Format a CohortReport for human-readable terminal output.
///
/// Values are rounded for display only; the report itself keeps full
/// precision.
pub fn format_report(report: &CohortReport) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(62);

    output.push_str("talent-analytics\n");
    output.push_str(&sep);
    output.push('\n');
    output.push('\n');

    output.push_str(&format!("  Población: {} miembros\n", report.population));
    output.push_str(&format!(
        "  Pares desempeño/potencial: {}\n",
        report.correlation.pairs
    ));
    output.push('\n');

    format_dimension(&mut output, &report.desempeno);
    format_dimension(&mut output, &report.potencial);

    output.push_str(&format!("  {}\n", "Relación desempeño-potencial".bold()));
    output.push_str(&format!(
        "    r de Pearson: {}\n",
        format_r(report.correlation.r, report.correlation.interpretation.strength)
    ));
    output.push_str(&format!(
        "    {}\n",
        report.correlation.interpretation.description
    ));
    output.push_str(&format!(
        "    Tendencia: y = {:.2}x + {:.2} (R\u{b2} {:.0}%)\n",
        report.correlation.fit.slope,
        report.correlation.fit.intercept,
        report.correlation.fit.r_squared * 100.0
    ));
    output.push('\n');

    output.push_str(&format!("  {}\n", "Matriz 9-box".bold()));
    for cell in &report.nine_box.cells {
        if cell.count == 0 {
            continue;
        }
        let meta = cell.position.metadata();
        output.push_str(&format!(
            "    {:<22} {:>3}  ({:.1}%)\n",
            format_cell_label(meta.label, meta.talent_tier),
            cell.count,
            cell.percentage
        ));
    }
    if report.nine_box.unclassified_count > 0 {
        output.push_str(&format!(
            "    {:<22} {:>3}  ({:.1}%)\n",
            "Sin clasificar".dimmed(),
            report.nine_box.unclassified_count,
            report.nine_box.unclassified_pct
        ));
    }
    output.push('\n');

    output.push_str(&sep);
    output.push('\n');
    output.push_str("Nota: los porcentajes se redondean solo para la presentación.\n");

    output
}

fn format_dimension(output: &mut String, report: &DimensionReport) {
    output.push_str(&format!("  {}\n", report.dimension.bold()));
    output.push_str(&format!(
        "    Evaluados: {}   Media: {:.1}   Desviación: {:.1}\n",
        report.evaluated, report.summary.mean, report.summary.std_dev
    ));

    // Renderers must not scale against a zero-width range
    if report.box_plot.has_positive_range() {
        output.push_str(&format!(
            "    Rango: {:.1}\u{2013}{:.1}   Q1 {:.1} | Mediana {:.1} | Q3 {:.1}\n",
            report.box_plot.min,
            report.box_plot.max,
            report.quartiles.q1,
            report.quartiles.median,
            report.quartiles.q3
        ));
    } else if report.evaluated > 0 {
        output.push_str(&format!(
            "    Rango degenerado en {:.1}; sin diagrama de caja\n",
            report.box_plot.median
        ));
    }

    for band in &report.distribution {
        if band.count == 0 {
            continue;
        }
        output.push_str(&format!(
            "      {:<18} {:>3}  ({:.1}%)\n",
            band.band.label(),
            band.count,
            band.percentage
        ));
    }

    let flagged = report.outliers.low_count + report.outliers.high_count;
    if flagged > 0 {
        output.push_str(&format!(
            "    {}\n",
            format!(
                "\u{26A0} {} valores atípicos ({} bajos, {} altos)",
                flagged, report.outliers.low_count, report.outliers.high_count
            )
            .yellow()
        ));
        for outlier in report.outliers.high.iter().chain(&report.outliers.low) {
            output.push_str(&format!(
                "      {:.1} (z = {:+.2})\n",
                outlier.value, outlier.z_score
            ));
        }
    }
    output.push('\n');
}

fn format_r(r: f64, strength: Strength) -> String {
    let text = format!("{:.3}", r);
    match strength {
        Strength::MuyFuerte | Strength::Fuerte => text.green().to_string(),
        Strength::Moderada => text.yellow().to_string(),
        Strength::Debil | Strength::MuyDebil => text.normal().to_string(),
    }
}

fn format_cell_label(label: &str, tier: TalentTier) -> String {
    match tier {
        TalentTier::Critico => label.green().bold().to_string(),
        TalentTier::Alto => label.green().to_string(),
        TalentTier::Medio => label.normal().to_string(),
        TalentTier::Bajo => label.red().to_string(),
    }
}
