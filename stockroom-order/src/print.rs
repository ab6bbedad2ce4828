//! Printable requisition document.
//!
//! Produces a self-contained HTML page with inline CSS. Labels are Thai, and
//! the date uses the Thai locale short form with the Buddhist-era year.

use std::fmt::Write;

use chrono::{Datelike, NaiveDate};

use crate::document::DocumentNumber;
use crate::models::{CartItem, Requester};

const BUDDHIST_ERA_OFFSET: i32 = 543;

const STYLE: &str = "\
body { font-family: 'Sarabun', sans-serif; }
table { width: 100%; border-collapse: collapse; }
th, td { border: 1px solid black; padding: 8px; }
.header { margin-bottom: 20px; }
.footer { margin-top: 20px; }
@media print { button { display: none; } }";

pub struct PrintDocument<'a> {
    pub date: NaiveDate,
    pub document_no: DocumentNumber,
    pub requester: &'a Requester,
    pub items: &'a [CartItem],
    pub total: f64,
}

impl PrintDocument<'_> {
    pub fn render(&self) -> String {
        let mut rows = String::new();
        for item in self.items {
            // Writing into a String cannot fail
            let _ = writeln!(
                rows,
                "<tr><td>{}</td><td>{}</td><td>{:.2}</td><td>{}</td><td>{:.2}</td></tr>",
                escape_html(&item.id),
                escape_html(&item.name),
                item.price,
                item.order_quantity,
                item.line_total(),
            );
        }

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>ใบเบิกสินค้า</title>
<style>
{style}
</style>
</head>
<body>
<div class="header">
<h2>ใบเบิกสินค้า</h2>
<p>วันที่เบิก: {date}</p>
<p>เลขที่เอกสาร: {document_no}</p>
<p>เบิกไปสถานที่: {location_code} {location_name}</p>
<p>ชื่อบุคคลที่เบิก: {person_id} {person_name}</p>
</div>
<table>
<thead>
<tr><th>รหัส</th><th>รายการ</th><th>ราคา</th><th>จำนวน</th><th>รวมเงิน</th></tr>
</thead>
<tbody>
{rows}</tbody>
</table>
<div class="footer">
<p>รวมทั้งสิ้น: {total:.2} บาท</p>
</div>
<button onclick="window.print()">พิมพ์เอกสาร</button>
</body>
</html>
"#,
            style = STYLE,
            date = format_thai_date(self.date),
            document_no = self.document_no,
            location_code = escape_html(&self.requester.location_code),
            location_name = escape_html(&self.requester.location_name),
            person_id = escape_html(&self.requester.person_id),
            person_name = escape_html(&self.requester.person_name),
            rows = rows,
            total = self.total,
        )
    }
}

/// `d/m/yyyy` with the year in the Buddhist era
pub fn format_thai_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year() + BUDDHIST_ERA_OFFSET)
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<CartItem> {
        vec![
            CartItem {
                id: "1".to_string(),
                name: "Ring".to_string(),
                image: String::new(),
                price: 9.99,
                order_quantity: 3,
            },
            CartItem {
                id: "9".to_string(),
                name: "Drive <4TB> & Case".to_string(),
                image: String::new(),
                price: 64.0,
                order_quantity: 1,
            },
        ]
    }

    #[test]
    fn test_thai_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_thai_date(date), "5/3/2567");
    }

    #[test]
    fn test_render_embeds_cart_and_total() {
        let requester = Requester::default();
        let items = items();
        let doc = PrintDocument {
            date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            document_no: DocumentNumber::new(4),
            requester: &requester,
            items: &items,
            total: 93.97,
        };

        let html = doc.render();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<p>วันที่เบิก: 31/12/2567</p>"));
        assert!(html.contains("<p>เลขที่เอกสาร: IB-000004</p>"));
        assert!(html.contains("<tr><td>1</td><td>Ring</td><td>9.99</td><td>3</td><td>29.97</td></tr>"));
        assert!(html.contains("<td>Drive &lt;4TB&gt; &amp; Case</td>"));
        assert!(html.contains("รวมทั้งสิ้น: 93.97 บาท"));
        assert!(html.contains("นายเอกพล โจมา"));
    }

    #[test]
    fn test_render_empty_cart() {
        let requester = Requester::default();
        let doc = PrintDocument {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            document_no: DocumentNumber::new(12),
            requester: &requester,
            items: &[],
            total: 0.0,
        };

        let html = doc.render();
        assert!(!html.contains("<tr><td>"));
        assert!(html.contains("รวมทั้งสิ้น: 0.00 บาท"));
    }
}
