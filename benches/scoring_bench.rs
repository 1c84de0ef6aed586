//! Scoring throughput over a catalog-sized entry set.

use archrec::catalog::Catalog;
use archrec::config::EngineConfig;
use archrec::context::normalize_from_str;
use archrec::engine::Engine;
use criterion::{criterion_group, criterion_main, Criterion};
use serde_json::json;
use std::collections::BTreeMap;

fn synthetic_catalog(entries: usize) -> Catalog {
    let families = ["iaas", "paas", "cloud_native", "data", "foundation"];
    let treatments = [
        json!(["rehost", "tolerate"]),
        json!(["replatform", "refactor"]),
        json!(["refactor", "rebuild"]),
    ];
    let qualities = ["curated", "ai_enriched", "ai_suggested", "example_only"];
    let architectures: Vec<_> = (0..entries)
        .map(|i| {
            json!({
                "architecture_id": format!("arch-{i:03}"),
                "name": format!("Synthetic architecture {i}"),
                "family": families[i % families.len()],
                "workload_domain": "general",
                "expected_runtime_models": ["monolith", "n_tier", "mixed"],
                "supported_treatments": treatments[i % treatments.len()],
                "availability_models": ["single_region", "single_region_ha", "multi_region"],
                "security_level": ["basic", "enterprise", "regulated"][i % 3],
                "operating_model_required": ["traditional_it", "transitional", "devops"][i % 3],
                "cost_profile": "balanced",
                "complexity": ["low", "medium", "high"][i % 3],
                "core_services": ["azure_virtual_machines"],
                "browse_tags": ["lift_and_shift"],
                "catalog_quality": qualities[i % qualities.len()]
            })
        })
        .collect();
    let doc = json!({ "version": "1.0.0", "architectures": architectures }).to_string();
    archrec::catalog::load_catalog(&doc).unwrap().0
}

fn bench_scoring(c: &mut Criterion) {
    let engine = Engine::new(synthetic_catalog(170), EngineConfig::default()).unwrap();
    let ctx = normalize_from_str(
        &json!({
            "app_overview": {
                "application": "bench-app",
                "business_crtiticality": "high",
                "treatment": "rehost"
            },
            "server_details": [
                { "server_name": "a", "role": "web" },
                { "server_name": "b", "role": "db" }
            ]
        })
        .to_string(),
    )
    .unwrap();
    let answers = BTreeMap::new();

    c.bench_function("score_170_entries", |b| {
        b.iter(|| engine.score(&ctx, &answers).unwrap())
    });
}

criterion_group!(benches, bench_scoring);
criterion_main!(benches);
