//! PDF report generation
//!
//! Renders the overall profitability figures, the project table and any
//! overwork warnings into an A4 document, returned as bytes. Saving the
//! bytes anywhere is the caller's business.

use chrono::Local;
use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};

use crate::models::project::Project;
use crate::services::project_service::ProjectService;
use crate::storage::Database;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const LINE_HEIGHT_MM: f32 = 7.0;

/// Generates PDF reports from the current project data
pub struct PdfExportService<'a> {
    projects: ProjectService<'a>,
}

impl<'a> PdfExportService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self {
            projects: ProjectService::new(db),
        }
    }

    /// Build the full project report and return the PDF bytes
    pub fn generate_project_report(&self) -> Result<Vec<u8>, String> {
        let overall = self
            .projects
            .overall_profitability()
            .map_err(|e| format!("Failed to compute profitability: {}", e))?;
        let projects = self
            .projects
            .list_projects()
            .map_err(|e| format!("Failed to list projects: {}", e))?;
        let warnings = self
            .projects
            .check_for_overwork()
            .map_err(|e| format!("Failed to check for overwork: {}", e))?;

        let (doc, page, layer) = PdfDocument::new(
            "Freelance Project Report",
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Layer 1",
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| format!("Failed to load font: {}", e))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| format!("Failed to load font: {}", e))?;

        let mut writer = ReportWriter {
            doc: &doc,
            layer: doc.get_page(page).get_layer(layer),
            y: PAGE_HEIGHT_MM - MARGIN_MM,
            regular,
            bold,
        };

        writer.heading("FREELANCE PROJECT REPORT", 20.0, 55.0);
        writer.text(
            &format!("Date: {}", Local::now().format("%d.%m.%Y")),
            MARGIN_MM,
        );
        writer.space();

        writer.heading("OVERALL PROFITABILITY", 14.0, MARGIN_MM);
        writer.text(&format!("Total revenue: {:.2}", overall.total_revenue), MARGIN_MM);
        writer.text(&format!("Total hours: {:.1} h", overall.total_hours), MARGIN_MM);
        writer.text(
            &format!("Average rate: {:.2} /h", overall.average_hourly_rate),
            MARGIN_MM,
        );
        writer.text(&format!("Projects: {}", overall.project_count), MARGIN_MM);
        writer.space();

        if !projects.is_empty() {
            writer.heading("PROJECTS", 14.0, MARGIN_MM);
            writer.table_header();
            for project in &projects {
                writer.project_row(project);
            }
            writer.space();
        }

        if !warnings.is_empty() {
            writer.heading("OVERWORK WARNINGS", 14.0, MARGIN_MM);
            for warning in &warnings {
                writer.text(&format!("- {}", warning), MARGIN_MM);
            }
        }

        drop(writer);
        doc.save_to_bytes()
            .map_err(|e| format!("Failed to serialize PDF: {}", e))
    }
}

/// Column x positions for the project table, in mm
const COL_NAME: f32 = 20.0;
const COL_CLIENT: f32 = 70.0;
const COL_RATE: f32 = 110.0;
const COL_HOURS: f32 = 132.0;
const COL_REVENUE: f32 = 152.0;
const COL_STATUS: f32 = 178.0;

struct ReportWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl ReportWriter<'_> {
    fn advance(&mut self, height: f32) {
        if self.y - height < MARGIN_MM {
            let (page, layer) = self
                .doc
                .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT_MM - MARGIN_MM;
        } else {
            self.y -= height;
        }
    }

    fn heading(&mut self, text: &str, size: f32, x: f32) {
        self.advance(LINE_HEIGHT_MM + 3.0);
        self.layer.use_text(text, size, Mm(x), Mm(self.y), &self.bold);
        self.advance(LINE_HEIGHT_MM);
    }

    fn text(&mut self, text: &str, x: f32) {
        self.layer.use_text(text, 11.0, Mm(x), Mm(self.y), &self.regular);
        self.advance(LINE_HEIGHT_MM);
    }

    fn space(&mut self) {
        self.advance(LINE_HEIGHT_MM / 2.0);
    }

    fn cell(&self, text: &str, x: f32, font: &IndirectFontRef) {
        self.layer.use_text(text, 10.0, Mm(x), Mm(self.y), font);
    }

    fn table_header(&mut self) {
        self.cell("Name", COL_NAME, &self.bold);
        self.cell("Client", COL_CLIENT, &self.bold);
        self.cell("Rate", COL_RATE, &self.bold);
        self.cell("Hours", COL_HOURS, &self.bold);
        self.cell("Revenue", COL_REVENUE, &self.bold);
        self.cell("Status", COL_STATUS, &self.bold);
        self.advance(LINE_HEIGHT_MM);
    }

    fn project_row(&mut self, project: &Project) {
        self.cell(&fit(&project.name, 26), COL_NAME, &self.regular);
        self.cell(&fit(&project.client, 20), COL_CLIENT, &self.regular);
        self.cell(&format!("{:.2}", project.hourly_rate), COL_RATE, &self.regular);
        self.cell(&format!("{:.1}", project.hours_worked), COL_HOURS, &self.regular);
        self.cell(&format!("{:.2}", project.revenue()), COL_REVENUE, &self.regular);
        self.cell(project.status.label(), COL_STATUS, &self.regular);
        self.advance(LINE_HEIGHT_MM);
    }
}

/// Truncate a value so it stays inside its table column
fn fit(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
