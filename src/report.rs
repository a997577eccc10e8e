//! Report formatting. These are pure, total functions: a missing data point
//! renders as a placeholder line, never an error.
//!
//! Output uses Telegram Markdown, so every `*` must be paired.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::market::{PriceQuote, ThroughputSample};

/// Current time in IST, the timezone the news scan reports in.
pub fn now_ist() -> DateTime<Tz> {
    Utc::now().with_timezone(&chrono_tz::Asia::Kolkata)
}

/// News scan report. The verification pipeline is not live yet, so the body
/// is a static status line with a live timestamp.
pub fn news_report(now: DateTime<Tz>) -> String {
    format!(
        "🗞️ *Latest Verified News Scan* (Time: {} IST)\n\
         Status: Scanners Active. No major Dharmic news detected.",
        now.format("%H:%M:%S")
    )
}

/// Solana market report: price line, throughput line, congestion status.
pub fn market_report(quote: Option<&PriceQuote>, sample: Option<&ThroughputSample>) -> String {
    let price_line = match quote {
        Some(q) => format!("💰 *Price:* ${:.2} (24h: {:.2}%)", q.usd, q.change_24h),
        None => "💰 *Price:* Data Unavailable".to_string(),
    };

    let tps_line = match sample {
        Some(s) => format!("⚡ *TPS:* {:.0} (Avg.)", s.tps()),
        None => "⚡ *TPS:* Data Unavailable".to_string(),
    };

    format!(
        "🔱 *NĀRAD SOLANA REPORT* 🔱\n\
         {price_line}\n\
         {tps_line}\n\
         *Congestion:* NONE (Basic Status OK)"
    )
}

pub fn whale_report() -> String {
    "🐋 *Whale Movement Scan*:\n\
     Status: Placeholder - No significant movements (>$5M) detected."
        .to_string()
}

pub fn risk_report() -> String {
    "🚨 *Market Risk Assessment*\n\
     RISK LEVEL: *MODERATE*. Sentiment is positive, but caution is advised."
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_news_report_renders_timestamp() {
        let now = chrono_tz::Asia::Kolkata
            .with_ymd_and_hms(2024, 1, 5, 9, 30, 7)
            .unwrap();
        let report = news_report(now);
        assert!(report.contains("09:30:07 IST"));
        assert!(report.contains("No major Dharmic news detected"));
    }

    #[test]
    fn test_market_report_with_data() {
        let quote = PriceQuote {
            usd: 150.25,
            change_24h: 2.34,
        };
        let sample = ThroughputSample {
            num_transactions: 1000,
            sample_period_secs: 2,
        };
        let report = market_report(Some(&quote), Some(&sample));
        assert!(report.contains("$150.25"));
        assert!(report.contains("2.34%"));
        assert!(report.contains("*TPS:* 500 (Avg.)"));
        assert!(report.contains("*Congestion:* NONE"));
    }

    #[test]
    fn test_market_report_all_unavailable() {
        let report = market_report(None, None);
        assert_eq!(report.matches("Data Unavailable").count(), 2);
        assert!(report.contains("*Congestion:* NONE (Basic Status OK)"));
    }

    #[test]
    fn test_market_report_partial_outage() {
        let quote = PriceQuote {
            usd: 98.1,
            change_24h: -4.2,
        };
        let report = market_report(Some(&quote), None);
        assert!(report.contains("$98.10"));
        assert!(report.contains("-4.20%"));
        assert!(report.contains("*TPS:* Data Unavailable"));
    }

    #[test]
    fn test_market_report_rounds_tps() {
        let sample = ThroughputSample {
            num_transactions: 2941,
            sample_period_secs: 2,
        };
        // 1470.5 rounds to even under {:.0}
        let report = market_report(None, Some(&sample));
        assert!(report.contains("*TPS:* 1470 (Avg.)"));
    }

    #[test]
    fn test_whale_report_static_content() {
        let report = whale_report();
        assert!(report.contains("Whale Movement Scan"));
        assert!(report.contains(">$5M"));
    }

    #[test]
    fn test_risk_report_static_content() {
        let report = risk_report();
        assert!(report.contains("Market Risk Assessment"));
        assert!(report.contains("*MODERATE*"));
    }

    #[test]
    fn test_all_reports_have_balanced_bold_markers() {
        let now = chrono_tz::Asia::Kolkata
            .with_ymd_and_hms(2024, 1, 5, 12, 0, 0)
            .unwrap();
        for report in [
            news_report(now),
            market_report(None, None),
            whale_report(),
            risk_report(),
        ] {
            assert_eq!(
                report.matches('*').count() % 2,
                0,
                "unbalanced bold markers in: {report}"
            );
        }
    }
}
