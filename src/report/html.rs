//! HTML report generation
//!
//! Emits the fixed report template with three substitution points: the
//! chemical filter options, the species filter options, and the table
//! rows. Everything interactive after that (filtering, sorting, paging)
//! is client-side DataTables behavior baked into the template; the
//! renderer itself does no data derivation, it only escapes and places
//! text the earlier stages produced.

use crate::normalize::{BadgeCategory, NormalizedRecord};
use crate::vocab::Vocabulary;
use std::io::{self, Write};

/// External lookup service for bibliographic references.
const PUBMED_URL: &str = "https://pubmed.ncbi.nlm.nih.gov";

pub fn write<W: Write>(
    writer: &mut W,
    records: &[NormalizedRecord],
    vocab: &Vocabulary,
) -> io::Result<()> {
    let chem_options = build_options(&vocab.chemicals);
    let species_options = build_options(&vocab.species);
    let rows = build_rows(records);

    write!(writer, r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>SUS-PECIES Database</title>
  <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css" rel="stylesheet">
  <link rel="stylesheet" href="https://cdn.datatables.net/1.13.6/css/dataTables.bootstrap5.min.css">
</head>
<body>
  <nav class="navbar navbar-expand-lg navbar-dark bg-dark mb-4">
    <div class="container-fluid">
      <a class="navbar-brand" href="#">SUS-PECIES</a>
      <span class="navbar-text text-light">A database for exploring chemical&ndash;species susceptibility interactions</span>
    </div>
  </nav>
  <div class="container">
    <div class="row mb-3">
      <div class="col-md-4">
        <select id="chemFilter" class="form-select">
          <option value="">All Chemicals</option>
{chem_options}        </select>
      </div>
      <div class="col-md-4">
        <select id="spFilter" class="form-select">
          <option value="">All Species</option>
{species_options}        </select>
      </div>
    </div>
    <table id="susTable" class="table table-striped table-bordered" style="width:100%">
      <thead class="table-dark"><tr>
        <th>Chemical</th><th>Species</th><th>Gene</th>
        <th>Interaction</th><th>Actions</th><th>PubMed</th>
      </tr></thead>
      <tbody>
{rows}      </tbody>
    </table>
  </div>
  <script src="https://code.jquery.com/jquery-3.7.1.min.js"></script>
  <script src="https://cdn.datatables.net/1.13.6/js/jquery.dataTables.min.js"></script>
  <script src="https://cdn.datatables.net/1.13.6/js/dataTables.bootstrap5.min.js"></script>
  <script>
    $(document).ready(function() {{
      var table = $('#susTable').DataTable({{
        pageLength: 10,
        lengthMenu: [5, 10, 20, 50]
      }});
      function exactSearch(column, value) {{
        var pattern = value ? '^' + $.fn.dataTable.util.escapeRegex(value) + '$' : '';
        table.column(column).search(pattern, true, false).draw();
      }}
      $('#chemFilter').on('change', function() {{
        exactSearch(0, this.value);
      }});
      $('#spFilter').on('change', function() {{
        exactSearch(1, this.value);
      }});
    }});
  </script>
</body>
</html>
"##,
        chem_options = chem_options,
        species_options = species_options,
        rows = rows
    )?;

    Ok(())
}

/// One `<option>` per vocabulary entry, already sorted upstream. The
/// leading "show all" option lives in the template itself.
fn build_options(values: &[String]) -> String {
    let mut out = String::new();
    for value in values {
        let escaped = html_escape(value);
        out.push_str(&format!(
            "          <option value=\"{escaped}\">{escaped}</option>\n"
        ));
    }
    out
}

fn build_rows(records: &[NormalizedRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&format!(
            "      <tr>\n        <td>{chemical}</td>\n        <td>{species}</td>\n        <td>{gene}</td>\n        <td>{interaction}</td>\n        <td>{badges}</td>\n        <td>{pubmed}</td>\n      </tr>\n",
            chemical = html_escape(&record.chemical),
            species = html_escape(&record.species),
            gene = html_escape(&record.gene_symbol),
            interaction = html_escape(&record.interaction),
            badges = build_badges(record),
            pubmed = build_pubmed_links(record),
        ));
    }
    out
}

/// One styled label per action token; an empty token list renders an empty
/// cell, never an empty badge element.
fn build_badges(record: &NormalizedRecord) -> String {
    record
        .badges
        .iter()
        .map(|badge| {
            format!(
                "<span class=\"badge {} me-1\">{}</span>",
                badge_class(badge.category),
                html_escape(&badge.label)
            )
        })
        .collect::<Vec<_>>()
        .join("")
}

fn badge_class(category: BadgeCategory) -> &'static str {
    match category {
        BadgeCategory::Increase => "bg-success",
        BadgeCategory::Decrease => "bg-danger",
        BadgeCategory::Other => "bg-secondary",
    }
}

/// Comma-separated links, no trailing separator, no link for an empty list.
fn build_pubmed_links(record: &NormalizedRecord) -> String {
    record
        .pubmed_ids
        .iter()
        .map(|id| {
            let escaped = html_escape(id);
            format!("<a href=\"{PUBMED_URL}/{escaped}\" target=\"_blank\">{escaped}</a>")
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Escape text for both element and attribute positions.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
