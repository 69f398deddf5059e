use serde_json::json;

use super::*;

fn months() -> Vec<MonthlyCount> {
    vec![
        MonthlyCount { month: "2020-04".into(), pretty: "April 2020".into(), count: 120 },
        MonthlyCount { month: "2020-05".into(), pretty: "May 2020".into(), count: 98 },
    ]
}

#[test]
fn plays_by_month_matches_the_dashboard_chart_shape() {
    let config = serde_json::to_value(plays_by_month(&months())).unwrap();
    assert_eq!(config, json!({
        "type": "bar",
        "data": {
            "labels": ["April 2020", "May 2020"],
            "datasets": [{
                "data": [120, 98],
                "label": "Plays",
                "backgroundColor": "rgba(211, 211, 211, 0.5)",
                "borderColor": "lightgray",
                "borderWidth": 1
            }]
        },
        "options": {
            "responsive": true,
            "legend": { "display": false },
            "title": { "display": false },
            "scales": {
                "xAxes": [{ "gridLines": { "display": false } }],
                "yAxes": [{ "gridLines": { "display": false }, "ticks": { "beginAtZero": true } }]
            }
        }
    }));
}

#[test]
fn lifetime_chart_is_labelled_with_the_track() {
    let config = serde_json::to_value(lifetime_chart("Holocene", &months())).unwrap();
    assert_eq!(config["data"]["datasets"][0]["label"], "Holocene");
    assert_eq!(config["data"]["labels"][1], "May 2020");
}

#[test]
fn mount_renders_a_canvas_and_returns_the_config() {
    let mut target = Fragment::new("lifetime");
    let config = mount_lifetime_chart(Some(&mut target), "Holocene", &months());

    assert!(config.is_some());
    assert!(target.html().contains("<canvas"));
    assert!(target.html().contains("data-track=\"Holocene\""));
}

#[test]
fn mount_is_a_no_op_when_the_target_is_gone() {
    assert!(mount_lifetime_chart(None, "Holocene", &months()).is_none());
}
