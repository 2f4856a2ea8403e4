//! Result tables

use super::escape;
use crate::models::Entity;

/// Render rows under their table's column headers
pub fn render_rows<E: Entity>(rows: &[E]) -> String {
    let mut html = String::from("<table>\n<thead><tr>");
    for column in E::TABLE.columns() {
        html.push_str(&format!("<th>{}</th>", escape(column)));
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for row in rows {
        html.push_str("<tr>");
        for cell in row.cells() {
            html.push_str(&format!("<td>{}</td>", escape(&cell)));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>");
    html
}
