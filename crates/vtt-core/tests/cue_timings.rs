//! Cue timing and settings tests

use vtt_core::{
    parse,
    parser::{
        ast::{CueLine, CuePosition, LineAlign, PositionAlign, TextAlign, WritingDirection},
        timestamp::{parse_timestamp, parse_timestamp_millis, try_parse_timestamp},
        DiagnosticCode,
    },
    Cue,
};

fn single_cue(timing_line: &str) -> (Cue, Vec<DiagnosticCode>) {
    let result = parse(&format!("WEBVTT\n\n{timing_line}\npayload"));
    let codes = result.diagnostics().iter().map(|d| d.code).collect();
    let cue = result.cues().first().cloned().expect("one cue");
    (cue, codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_grammar() {
        assert_eq!(parse_timestamp("00:01.250"), Some(1.25));
        assert_eq!(parse_timestamp("01:00:00.000"), Some(3600.0));
        assert_eq!(parse_timestamp("99:00.000"), Some(5940.0));
        assert_eq!(parse_timestamp("123:00:00.001"), Some(442_800.001));
        assert_eq!(parse_timestamp("1:00:00.000"), Some(3600.0));

        for invalid in [
            "00:60.000",
            "0:00.000",
            "00:00:60.000",
            "00:60:00.000",
            "00:00.00",
            "00:00.0000",
            "00:00,000",
            ":00:00.000",
            "00:00:00:00.000",
            "",
            " 00:00.000",
            "-0:00.000",
            "aa:bb.ccc",
        ] {
            assert_eq!(parse_timestamp(invalid), None, "{invalid:?}");
        }
    }

    #[test]
    fn test_timestamp_helpers() {
        assert_eq!(parse_timestamp_millis("00:01:02.003").ok(), Some(62_003));
        let error = try_parse_timestamp("00:61.000").unwrap_err();
        assert!(error.to_string().contains("00:61.000"));
    }

    #[test]
    fn test_reversed_timing_is_kept() {
        let (cue, codes) = single_cue("00:02.000 --> 00:01.000");
        assert_eq!(codes, vec![DiagnosticCode::CueTimingInvalidOrder]);
        assert_eq!(cue.start_time, 2.0);
        assert_eq!(cue.end_time, 1.0);
        assert!(!cue.has_valid_timing());
    }

    #[test]
    fn test_equal_times_are_valid() {
        let (cue, codes) = single_cue("00:01.000 --> 00:01.000");
        assert!(codes.is_empty());
        assert_eq!(cue.duration(), 0.0);
    }

    #[test]
    fn test_single_digit_hour_timings() {
        let (cue, codes) = single_cue("0:00:01.000 --> 0:00:02.500");
        assert!(codes.is_empty());
        assert_eq!(cue.start_time, 1.0);
        assert_eq!(cue.end_time, 2.5);
    }

    #[test]
    fn test_malformed_timestamp() {
        let (cue, codes) = single_cue("00:01 --> 00:02.000 align:start");
        assert_eq!(codes, vec![DiagnosticCode::TimestampInvalid]);
        assert_eq!(cue.start_time, 0.0);
        assert_eq!(cue.end_time, 0.0);
        assert_eq!(cue.align, TextAlign::Start);
        assert_eq!(cue.text, "payload");
    }

    #[test]
    fn test_missing_end_time() {
        let (_, codes) = single_cue("00:01.000 -->");
        assert_eq!(codes, vec![DiagnosticCode::TimestampInvalid]);
    }

    #[test]
    fn test_all_cue_settings() {
        let (cue, codes) = single_cue(
            "00:01.000 --> 00:02.000 vertical:rl line:-2,end position:20%,line-right size:60% align:left",
        );
        assert!(codes.is_empty());
        assert_eq!(cue.vertical, WritingDirection::VerticalGrowingLeft);
        assert_eq!(cue.line, CueLine::Value(-2.0));
        assert!(cue.snap_to_lines);
        assert_eq!(cue.line_align, Some(LineAlign::End));
        assert_eq!(cue.position, CuePosition::Percent(20.0));
        assert_eq!(cue.position_align, PositionAlign::LineRight);
        assert_eq!(cue.size, 60.0);
        assert_eq!(cue.align, TextAlign::Left);
    }

    #[test]
    fn test_settings_after_tabs() {
        let (cue, _) = single_cue("00:01.000\t-->\t00:02.000\tline:50%");
        assert_eq!(cue.end_time, 2.0);
        assert_eq!(cue.line, CueLine::Value(50.0));
        assert!(!cue.snap_to_lines);
    }

    #[test]
    fn test_cue_settings_never_report() {
        let (cue, codes) =
            single_cue("00:01.000 --> 00:02.000 vertical:up line:abc size:200% bogus:1 align");
        assert!(codes.is_empty());
        assert_eq!(cue.vertical, WritingDirection::Horizontal);
        assert_eq!(cue.line, CueLine::Auto);
        assert_eq!(cue.size, 100.0);
    }

    #[test]
    fn test_setting_order_decides_region() {
        let header = "WEBVTT\n\nREGION\nid:r\n\n";

        let result = parse(&format!("{header}00:01.000 --> 00:02.000 region:r line:1\nx"));
        assert!(result.cues()[0].region.is_none());

        let result = parse(&format!("{header}00:01.000 --> 00:02.000 line:1 region:r\nx"));
        assert_eq!(result.cues()[0].region_id(), Some("r"));

        let result = parse(&format!("{header}00:01.000 --> 00:02.000 region:r size:50%\nx"));
        assert!(result.cues()[0].region.is_none());

        let result = parse(&format!("{header}00:01.000 --> 00:02.000 region:r vertical:lr\nx"));
        assert!(result.cues()[0].region.is_none());
    }

    #[test]
    fn test_cue_display_round_trips_timing() {
        let (cue, _) = single_cue("01:02:03.004 --> 01:02:05.000");
        assert_eq!(
            cue.to_string(),
            "01:02:03.004 --> 01:02:05.000\npayload"
        );
    }
}
