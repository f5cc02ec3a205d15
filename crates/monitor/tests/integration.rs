// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: a dashboard recording several regions at once.

use region_monitor::{Dashboard, Monitor, MonitorError};
use std::time::Duration;

// ── Helpers ────────────────────────────────────────────────────

fn handle(dashboard: &mut Dashboard, payload: &[u8]) -> Result<usize, String> {
    let _guard = dashboard.scope("handle");
    if payload.is_empty() {
        return Err("empty payload".into());
    }
    Ok(payload.len())
}

// ── Recording ──────────────────────────────────────────────────

#[test]
fn test_guards_count_every_exit() {
    let mut dashboard = Dashboard::new();
    assert!(handle(&mut dashboard, b"abc").is_ok());
    assert!(handle(&mut dashboard, b"").is_err());
    assert!(handle(&mut dashboard, b"de").is_ok());

    assert_eq!(dashboard.get("handle").unwrap().count(), 3);
}

#[test]
fn test_manual_begin_end_and_guard_mix() {
    let mut dashboard = Dashboard::new();
    let monitor = dashboard.monitor("mixed");
    monitor.begin();
    monitor.end();
    drop(monitor.scope());
    monitor.record(Duration::from_millis(5));

    let m = dashboard.get("mixed").unwrap();
    assert_eq!(m.count(), 3);
    assert!(m.elapsed() >= Duration::from_millis(5));
}

#[test]
fn test_independent_monitors() {
    let mut a = Monitor::new("a");
    let mut b = Monitor::new("b");
    a.record(Duration::from_millis(1));
    assert_eq!(a.count(), 1);
    assert_eq!(b.count(), 0);
    b.record(Duration::from_millis(9));
    assert_eq!(b.average(), Duration::from_millis(9));
}

// ── Reporting ──────────────────────────────────────────────────

#[test]
fn test_report_lists_all_regions() {
    let mut dashboard = Dashboard::new();
    for name in ["reset", "allocate", "encode"] {
        dashboard.monitor(name).record(Duration::from_micros(250));
    }
    dashboard.display();

    let report = dashboard.report();
    assert_eq!(report.lines().count(), 3);
    assert!(report.contains("[allocate] count = 1"));
    assert!(dashboard.watch("encode").is_ok());
    assert_eq!(
        dashboard.watch("missing"),
        Err(MonitorError::UnknownRegion {
            name: "missing".into()
        })
    );
}

#[test]
fn test_dashboard_json_export() {
    let mut dashboard = Dashboard::new();
    dashboard.monitor("x").record(Duration::from_secs(1));
    let json = serde_json::to_string(&dashboard).unwrap();
    assert!(json.contains("\"x\""));
    assert!(json.contains("\"count\":1"));
}
