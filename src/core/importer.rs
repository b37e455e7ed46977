use crate::models::Account;

/// Header synonyms accepted for each logical column, matched case-insensitively
/// against the first row only.
const NAME_SYNONYMS: [&str; 3] = ["name", "account", "company"];
const DOMAIN_SYNONYMS: [&str; 2] = ["domain", "website"];
const SCORE_SYNONYMS: [&str; 2] = ["score", "priority"];

/// Column indices resolved from the header row.
#[derive(Debug, Clone, Copy, Default)]
struct HeaderColumns {
    name: Option<usize>,
    domain: Option<usize>,
    score: Option<usize>,
}

fn resolve_header(cells: &[String]) -> HeaderColumns {
    let find = |synonyms: &[&str]| cells.iter().position(|c| synonyms.contains(&c.as_str()));

    HeaderColumns {
        name: find(&NAME_SYNONYMS),
        domain: find(&DOMAIN_SYNONYMS),
        score: find(&SCORE_SYNONYMS),
    }
}

/// Split one CSV line on commas, respecting double-quoted fields.
///
/// A quote character toggles the in-quote state and is dropped from the
/// output; there is no escaped-quote support, and embedded newlines never
/// reach this function (the line splitter runs first). An unescaped quote
/// inside a field corrupts the split for the remainder of that line only.
/// Every field is trimmed.
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    fields.push(current);

    fields.iter().map(|f| f.trim().to_string()).collect()
}

/// Parse raw CSV text into account records.
///
/// The first non-empty line is the header; columns are resolved through the
/// synonym table. A missing name column falls back to positional column 0;
/// missing domain/score columns leave those fields absent. Rows whose
/// resolved name is empty are dropped silently. Header-only or empty input
/// yields an empty vec, not an error.
pub fn parse_accounts(text: &str) -> Vec<Account> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    if lines.is_empty() {
        return Vec::new();
    }

    let header: Vec<String> = split_csv_line(lines[0])
        .iter()
        .map(|h| h.to_lowercase())
        .collect();
    let columns = resolve_header(&header);

    let mut accounts = Vec::new();

    for line in &lines[1..] {
        let cells = split_csv_line(line);

        let name = match columns.name {
            Some(idx) => cells.get(idx).cloned().unwrap_or_default(),
            None => cells.first().cloned().unwrap_or_default(),
        };

        if name.is_empty() {
            continue;
        }

        let domain = columns.domain.and_then(|idx| cells.get(idx)).cloned();
        // Unparseable score text means the field is absent, never NaN or 0.
        let score = columns
            .score
            .and_then(|idx| cells.get(idx))
            .and_then(|raw| raw.parse::<f64>().ok());

        accounts.push(Account {
            name,
            domain,
            score,
        });
    }

    accounts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sample_csv() {
        let accounts = parse_accounts("name,domain,score\nCompany A,companya.com,8.1");

        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].name, "Company A");
        assert_eq!(accounts[0].domain.as_deref(), Some("companya.com"));
        assert_eq!(accounts[0].score, Some(8.1));
    }

    #[test]
    fn test_header_only_yields_empty() {
        assert!(parse_accounts("name,domain,score").is_empty());
    }

    #[test]
    fn test_empty_input_yields_empty() {
        assert!(parse_accounts("").is_empty());
        assert!(parse_accounts("\n\n  \n").is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        let accounts = parse_accounts("name,domain\r\nCompany A,companya.com\r\nCompany B,companyb.io\r\n");

        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[1].name, "Company B");
        assert_eq!(accounts[1].domain.as_deref(), Some("companyb.io"));
    }

    #[test]
    fn test_header_synonyms() {
        let accounts = parse_accounts("company,website,priority\nAcme,acme.com,7");

        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].name, "Acme");
        assert_eq!(accounts[0].domain.as_deref(), Some("acme.com"));
        assert_eq!(accounts[0].score, Some(7.0));
    }

    #[test]
    fn test_header_matching_is_case_insensitive() {
        let accounts = parse_accounts("Name,DOMAIN,Score\nAcme,acme.com,3.5");

        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].domain.as_deref(), Some("acme.com"));
    }

    #[test]
    fn test_positional_name_fallback() {
        // No recognizable headers at all: column 0 becomes the name and the
        // header row itself is still consumed as a header.
        let accounts = parse_accounts("col_a,col_b\nAcme,acme.com");

        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].name, "Acme");
        assert_eq!(accounts[0].domain, None);
        assert_eq!(accounts[0].score, None);
    }

    #[test]
    fn test_row_with_empty_name_is_dropped() {
        let accounts = parse_accounts("name,domain,score\n,example.com,5\nAcme,acme.com,2");

        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].name, "Acme");
    }

    #[test]
    fn test_unparseable_score_is_absent() {
        let accounts = parse_accounts("name,score\nAcme,abc");

        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].score, None);
    }

    #[test]
    fn test_short_row_omits_missing_fields() {
        let accounts = parse_accounts("name,domain,score\nAcme");

        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].domain, None);
        assert_eq!(accounts[0].score, None);
    }

    #[test]
    fn test_quoted_field_with_comma() {
        let accounts = parse_accounts("name,domain\n\"Acme, Inc\",acme.com");

        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].name, "Acme, Inc");
        assert_eq!(accounts[0].domain.as_deref(), Some("acme.com"));
    }

    #[test]
    fn test_split_trims_fields() {
        assert_eq!(
            split_csv_line(" a , b ,\"  c \""),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn test_unescaped_embedded_quote_corrupts_that_line_only() {
        // The stray quote swallows the comma for the rest of the line; the
        // following row still parses normally.
        let accounts = parse_accounts("name,domain\nAcme \"West,acme.com\nBeta,beta.io");

        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].name, "Acme West,acme.com");
        assert_eq!(accounts[0].domain, None);
        assert_eq!(accounts[1].name, "Beta");
        assert_eq!(accounts[1].domain.as_deref(), Some("beta.io"));
    }
}
