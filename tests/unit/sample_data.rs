//! Sample data feeding the charts and table

use ezymetrics::data::{lead_source_data, leads_data, performance_data};
use ezymetrics::ui::charts::pie_slices;
use pretty_assertions::assert_eq;
use test_log::test;

#[test]
fn test_leads_literal_order() {
    let statuses: Vec<String> = leads_data().into_iter().map(|l| l.status).collect();
    assert_eq!(statuses, vec!["New", "Contacted", "Qualified"]);

    let ids: Vec<u32> = leads_data().iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_chart_samples() {
    let months: Vec<&str> = performance_data().iter().map(|p| p.name).collect();
    assert_eq!(months, vec!["Jan", "Feb", "Mar", "Apr", "May"]);

    let slices = pie_slices(&lead_source_data());
    let labels: Vec<&str> = slices.iter().map(|s| s.label).collect();
    assert_eq!(labels, vec!["Website", "Social Media", "Referral", "Direct"]);
    // Direct is 200 of 1200
    assert!((slices[3].sweep - 1.0 / 6.0).abs() < 1e-9);
}
