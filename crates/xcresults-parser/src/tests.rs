//! Pipeline tests for the parser

#[cfg(test)]
mod tests {
    use crate::{
        parse_meet_page, MeetParser, ParseError, ParserConfig, SkipReason, WarningKind,
    };
    use xcresults_domain::{FormatVariant, Gender, RawPage};

    fn pre_page(title: Option<&str>, text: &str) -> String {
        let head = title
            .map(|t| format!("<head><title>{}</title></head>", t))
            .unwrap_or_default();
        format!("<html>{}<body><pre>\n{}</pre></body></html>", head, text)
    }

    const UNPARSEABLE_ONLY: &str = "\
Event 3  Open 5k Run CC
    Name                    Year School                  Finals
  1 Lee, Sam                  10 Parkway West          18:01.00
";

    #[test]
    fn test_page_too_large() {
        let mut config = ParserConfig::default();
        config.max_page_bytes = 10;
        let parser = MeetParser::new(config).unwrap();

        let page = RawPage::new("<html><body>too long</body></html>", "https://example.test/raw");
        let err = parser.parse(&page).unwrap_err();
        assert_eq!(err, ParseError::PageTooLarge(page.len(), 10));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = ParserConfig::default();
        config.max_page_bytes = 0;
        assert!(matches!(MeetParser::new(config), Err(ParseError::Config(_))));
    }

    #[test]
    fn test_unrecognized_page() {
        let html = "<html><body><p>Course map and parking</p></body></html>";
        assert_eq!(
            parse_meet_page(html, "https://example.test/raw").unwrap_err(),
            ParseError::UnrecognizedFormat
        );
    }

    #[test]
    fn test_no_races_is_fatal_by_default() {
        let html = pre_page(Some("Dual Meet - MileSplit"), UNPARSEABLE_ONLY);
        let err = parse_meet_page(&html, "https://example.test/raw").unwrap_err();
        assert_eq!(err, ParseError::NoRaces);
    }

    #[test]
    fn test_no_races_allowed_when_lenient() {
        let html = pre_page(Some("Dual Meet - MileSplit"), UNPARSEABLE_ONLY);
        let parser = MeetParser::new(ParserConfig::lenient()).unwrap();
        let outcome = parser
            .parse(&RawPage::new(html, "https://example.test/raw"))
            .unwrap();

        assert!(outcome.meet.races.is_empty());
        assert_eq!(outcome.meet.meet_name.as_deref(), Some("Dual Meet"));
        assert_eq!(outcome.count(WarningKind::UnparseableHeader), 1);
        assert_eq!(outcome.skipped_rows(), 0);
    }

    #[test]
    fn test_missing_distance_and_metadata_warn() {
        let text = "\
Event 1  Boys Varsity
    Name                    Year School                  Finals
  1 Patten, Wade              12 Parkway West          16:15.54
";
        let outcome = parse_meet_page(&pre_page(None, text), "https://example.test/raw").unwrap();

        assert_eq!(outcome.meet.format, FormatVariant::FormatTwo);
        assert_eq!(outcome.meet.races.len(), 1);
        assert_eq!(outcome.meet.races[0].header.distance_meters, None);
        assert_eq!(outcome.meet.races[0].header.gender, Gender::Male);
        assert_eq!(outcome.meet.meet_name, None);
        assert_eq!(outcome.meet.meet_date, None);

        let kinds: Vec<WarningKind> = outcome.warnings.iter().map(|w| w.kind).collect();
        assert_eq!(
            kinds,
            vec![
                WarningKind::MissingMeetName,
                WarningKind::UnparsedDate,
                WarningKind::UnparsedDistance,
            ]
        );
    }

    #[test]
    fn test_missing_name_row_yields_one_warning() {
        let text = "\
Mens 5,000 Meters Varsity Boys
Pl Athlete                   Yr Team                        Time
  1 Alex Cravens             12 Rockhurst                15:54.29
  2                          11 De Smet Jesuit           16:01.50
  3 Luke Hart                10 Rockhurst                16:42.30
";
        let outcome = parse_meet_page(
            &pre_page(Some("Fall Classic - 9/6/2025 - MileSplit"), text),
            "https://example.test/raw",
        )
        .unwrap();

        let race = &outcome.meet.races[0];
        assert_eq!(race.individual_results.len(), 2);
        assert_eq!(outcome.skipped_rows(), 1);
        assert_eq!(outcome.count(WarningKind::RowSkipped(SkipReason::MissingName)), 1);
        assert_eq!(outcome.meet.meet_name.as_deref(), Some("Fall Classic - 9/6/2025"));
        assert_eq!(
            outcome.meet.meet_date,
            chrono::NaiveDate::from_ymd_opt(2025, 9, 6)
        );
    }

    #[test]
    fn test_free_function_matches_default_parser() {
        let text = "\
Event 2  Girls 5k Run CC Varsity
    Name  Year School  Finals
  1 Shah, Priya  11 Francis Howell  19:02.33
";
        let html = pre_page(Some("Hornet Classic - MileSplit"), text);
        let url = "https://example.test/raw";

        let a = parse_meet_page(&html, url).unwrap();
        let b = MeetParser::with_defaults().parse(&RawPage::new(html.clone(), url)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.meet.individual_count(), 1);
    }

    #[test]
    fn test_parser_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeetParser>();
    }
}
