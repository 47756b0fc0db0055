use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;

pub fn format_value(val: f64, fmt: &ValueFormat) -> String {
    match fmt {
        ValueFormat::Money { currency } => {
            let abs = val.abs();
            let formatted = if abs >= 1_000_000.0 {
                format!("{:.1}M", val / 1_000_000.0)
            } else if abs >= 1_000.0 {
                let int_part = val as i64;
                let frac = ((val.abs() - (int_part.abs() as f64)) * 100.0).round() as i64;
                let s = format_thousands(int_part);
                if frac == 0 {
                    s
                } else {
                    format!("{}.{:02}", s, frac)
                }
            } else {
                format!("{:.2}", val)
            };
            format!("{} {}", formatted, currency)
        }
        ValueFormat::Number { decimals } => {
            format!("{:.prec$}", val, prec = *decimals as usize)
        }
        ValueFormat::Percent { decimals } => {
            format!("{:.prec$}%", val * 100.0, prec = *decimals as usize)
        }
        ValueFormat::Integer => format_thousands(val as i64),
        ValueFormat::DurationSeconds => {
            let total = val.max(0.0) as i64;
            format!("{}:{:02}", total / 60, total % 60)
        }
    }
}

pub fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Primary numeric value (None = loading/error)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// How to format the value
    format: ValueFormat,
    /// Visual status
    #[prop(into)]
    status: Signal<IndicatorStatus>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let format_clone = format.clone();

    let status_class = move || match status.get() {
        IndicatorStatus::Good => "stat-card stat-card--success",
        IndicatorStatus::Bad => "stat-card stat-card--error",
        IndicatorStatus::Warning => "stat-card stat-card--warning",
        IndicatorStatus::Neutral => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => format_value(v, &format_clone),
        None => "—".to_string(),
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=status_class>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_234_567), "1\u{a0}234\u{a0}567");
        assert_eq!(format_thousands(-4_200), "-4\u{a0}200");
    }

    #[test]
    fn test_format_percent_scales_fraction() {
        let fmt = ValueFormat::Percent { decimals: 2 };
        assert_eq!(format_value(0.0421, &fmt), "4.21%");
        assert_eq!(format_value(0.0, &fmt), "0.00%");
    }

    #[test]
    fn test_format_duration_seconds() {
        let fmt = ValueFormat::DurationSeconds;
        assert_eq!(format_value(0.0, &fmt), "0:00");
        assert_eq!(format_value(59.0, &fmt), "0:59");
        assert_eq!(format_value(125.0, &fmt), "2:05");
    }

    #[test]
    fn test_format_money() {
        let fmt = ValueFormat::Money {
            currency: "USD".into(),
        };
        assert_eq!(format_value(12.5, &fmt), "12.50 USD");
        assert_eq!(format_value(2_500_000.0, &fmt), "2.5M USD");
    }
}
