use crate::core::ReportTable;
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs;
use std::path::Path;

/// A4 in points.
const A4_SHORT: f32 = 595.0;
const A4_LONG: f32 = 842.0;

/// Tables with more columns than this are laid out in landscape.
const PORTRAIT_MAX_COLUMNS: usize = 6;

/// Average Helvetica glyph width as a fraction of the font size.
const GLYPH_RATIO: f32 = 0.55;

/// Multi-page table writer on top of `pdf-writer`.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    page_refs: Vec<Ref>,
    next_id: i32,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    font_size: f32,
    title_font_size: f32,
}

impl PdfManager {
    pub fn new(landscape: bool) -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        let (page_w, page_h) = if landscape {
            (A4_LONG, A4_SHORT)
        } else {
            (A4_SHORT, A4_LONG)
        };

        Self {
            pdf,
            catalog_id,
            pages_id,
            font_id,
            page_refs: Vec::new(),
            next_id: 4,
            page_w,
            page_h,
            margin: 40.0,
            row_h: 18.0,
            font_size: 9.0,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = Ref::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Rows fitting below the title and the header row.
    fn rows_per_page(&self) -> usize {
        let usable = self.page_h - 2.0 * self.margin - 30.0 - self.row_h;
        ((usable / self.row_h).floor() as usize).max(1)
    }

    /// Column widths proportional to content, scaled down to the page.
    fn col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let char_w = self.font_size * GLYPH_RATIO;
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| (h.chars().count() as f32 + 2.0) * char_w)
            .collect();

        for row in rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = w.max((cell.chars().count() as f32 + 2.0) * char_w);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;
        if total > max {
            let scale = max / total;
            widths.iter_mut().for_each(|w| *w *= scale);
        }
        widths
    }

    fn text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(latin1(text).as_slice()));
        content.end_text();
    }

    fn row(&self, content: &mut Content, y: f32, widths: &[f32], cells: &[String], shade: Option<f32>) {
        let total: f32 = widths.iter().sum();

        if let Some(gray) = shade {
            content.save_state();
            content.set_fill_gray(gray);
            content.rect(self.margin, y, total, self.row_h);
            content.fill_nonzero();
            content.restore_state();
        }

        let char_w = self.font_size * GLYPH_RATIO;
        let mut x = self.margin;
        for (w, cell) in widths.iter().zip(cells) {
            let max_chars = ((w / char_w) as usize).saturating_sub(1).max(1);
            self.text(content, x + 3.0, y + 5.0, self.font_size, &truncate(cell, max_chars));

            content.save_state();
            content.set_stroke_gray(0.65);
            content.rect(x, y, *w, self.row_h);
            content.stroke();
            content.restore_state();

            x += w;
        }
    }

    /// Lay the table out over as many pages as needed. An empty table
    /// still produces one page with the header row.
    pub fn write_table(&mut self, title: &str, headers: &[&str], rows: &[Vec<String>]) {
        let widths = self.col_widths(headers, rows);
        let header_row: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        let per_page = self.rows_per_page();

        let chunks: Vec<&[Vec<String>]> = if rows.is_empty() {
            vec![&rows[..0]]
        } else {
            rows.chunks(per_page).collect()
        };
        let page_count = chunks.len();

        for (idx, chunk) in chunks.into_iter().enumerate() {
            let page_id = self.fresh_ref();
            let content_id = self.fresh_ref();
            self.page_refs.push(page_id);

            {
                let (pages_id, font_id) = (self.pages_id, self.font_id);
                let media = Rect::new(0.0, 0.0, self.page_w, self.page_h);
                let mut page = self.pdf.page(page_id);
                page.parent(pages_id).media_box(media).contents(content_id);
                page.resources().fonts().pair(Name(b"F1"), font_id);
            }

            let mut content = Content::new();

            self.text(
                &mut content,
                self.margin,
                self.page_h - self.margin,
                self.title_font_size,
                title,
            );
            self.text(
                &mut content,
                self.page_w - self.margin - 70.0,
                self.margin / 2.0,
                self.font_size,
                &format!("Page {} of {}", idx + 1, page_count),
            );

            let mut y = self.page_h - self.margin - 30.0;
            self.row(&mut content, y, &widths, &header_row, Some(0.85));

            for (i, r) in chunk.iter().enumerate() {
                y -= self.row_h;
                let shade = (i % 2 == 0).then_some(0.96);
                self.row(&mut content, y, &widths, r, shade);
            }

            self.pdf.stream(content_id, &content.finish());
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        let kids = self.page_refs.clone();
        self.pdf
            .pages(self.pages_id)
            .count(kids.len() as i32)
            .kids(kids);

        fs::write(path, self.pdf.finish())
    }
}

/// PDF export of a report, landscape when the table is wide.
pub(crate) fn export_pdf(table: &ReportTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let mut pdf = PdfManager::new(table.headers.len() > PORTRAIT_MAX_COLUMNS);
    pdf.write_table(&table.title, &table.headers, &table.rows);
    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('~');
    out
}

/// The standard Type1 font only covers single-byte text.
fn latin1(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| if (c as u32) < 256 { c as u8 } else { b'?' })
        .collect()
}
