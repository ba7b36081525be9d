// Copyright 2026 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drill into an arc and back out with a simulated clock, printing geometry.
//!
//! Run with `RUST_LOG=debug` to see the controller's transition log.

use sunburst_chart::{ArcId, ChartOptions, SunburstChart};
use sunburst_demos::{FLASK_JSON, SvgPathRenderer, chart_from_json, svg_document};

const FRAME_MS: u64 = 250;

fn print_frames(chart: &SunburstChart, start: u64) {
    let duration = chart.options().transition_duration;
    let mut now = start;
    while now <= start + duration {
        let progress = chart.progress(now).unwrap_or(1.0);
        println!("  t={now:>5}ms progress={progress:.2}");
        for (id, state) in chart.frame(now) {
            let name = &chart.arcs()[id.index()].name;
            println!(
                "    {name:<16} level={:>5.2} angles=[{:.3}, {:.3}]",
                state.level, state.start_angle, state.stop_angle
            );
        }
        now += FRAME_MS;
    }
}

fn main() {
    env_logger::init();

    let mut chart = match chart_from_json(FLASK_JSON, ChartOptions::default()) {
        Ok(chart) => chart,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let renderer = SvgPathRenderer {
        layout: chart.layout(),
    };

    let paths = chart.render_resting(&renderer);
    println!("{}", svg_document(&chart, paths.iter().map(|(_, d)| d.as_str())));

    let docs = chart
        .arcs()
        .iter()
        .position(|arc| arc.name == "docs")
        .map(ArcId)
        .unwrap_or(ArcId::ROOT);

    let mut now = 0;
    for label in ["drill down into docs", "drill back out"] {
        let Some(plan) = chart.on_arc_clicked(docs, now) else {
            println!("click ignored");
            continue;
        };
        println!(
            "{label}: {:?}, hide {:?}, show {:?}",
            plan.direction, plan.hide, plan.show
        );
        print_frames(&chart, now);
        now += plan.duration;
        chart.poll(now);
        println!("  focus is now {:?}", chart.arcs()[chart.focus().index()].name);
    }

    let paths = chart.render_resting(&renderer);
    println!("{}", svg_document(&chart, paths.iter().map(|(_, d)| d.as_str())));
}
