//! Pure HTML rendering of a deal batch. The only input besides the deals is
//! the clock reading passed in by the caller.

use crate::domain::model::Deal;
use chrono::{DateTime, Local};

/// Client-side refresh interval embedded in the page head.
pub const REFRESH_SECONDS: u32 = 5;

const NAME_MAX_CHARS: usize = 70;
const HIGHLIGHT_DISCOUNT: f64 = 80.0;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn render_document(deals: &[Deal], generated_at: DateTime<Local>) -> String {
    let mut html = format!(
        r#"<html>
<head>
    <meta http-equiv="refresh" content="{refresh}">
    <style>
        table {{
            width: 100%;
            border-collapse: collapse;
            margin: 20px 0;
            font-family: Arial, sans-serif;
        }}
        th, td {{
            padding: 12px;
            text-align: left;
            border-bottom: 1px solid #ddd;
        }}
        th {{
            background-color: #4CAF50;
            color: white;
        }}
        tr:hover {{background-color: #f5f5f5;}}
        .timestamp {{
            color: #666;
            font-size: 0.9em;
            padding: 10px;
        }}
    </style>
</head>
<body>
<h1>Live Deal Tracker 🔄</h1>
<div class="timestamp">Last updated: {timestamp}</div>
<table>
    <tr>
        <th>Name</th>
        <th>Condition</th>
        <th>Price</th>
        <th>MSRP</th>
        <th>Discount</th>
        <th>Link</th>
    </tr>
"#,
        refresh = REFRESH_SECONDS,
        timestamp = generated_at.format(TIMESTAMP_FORMAT),
    );

    for deal in deals {
        html.push_str(&render_row(deal));
    }

    html.push_str("</table>\n</body>\n</html>\n");
    html
}

fn render_row(deal: &Deal) -> String {
    let color = if deal.discount >= HIGHLIGHT_DISCOUNT {
        "green"
    } else {
        "orange"
    };

    format!(
        "    <tr>\n        <td>{name}</td>\n        <td>{condition}</td>\n        <td>${price:.2}</td>\n        <td>${msrp:.2}</td>\n        <td style=\"color: {color}\">{discount:.1}%</td>\n        <td><a href=\"{link}\" target=\"_blank\">View</a></td>\n    </tr>\n",
        name = truncated_name(&deal.name),
        condition = deal.condition,
        price = deal.price,
        msrp = deal.msrp,
        color = color,
        discount = deal.discount,
        link = deal.listing_link,
    )
}

fn truncated_name(name: &str) -> String {
    let mut out: String = name.chars().take(NAME_MAX_CHARS).collect();
    if name.chars().count() > NAME_MAX_CHARS {
        out.push_str("...");
    }
    out
}
