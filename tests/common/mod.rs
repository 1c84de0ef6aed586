// Shared fixtures for archrec integration tests.
#![allow(dead_code)]

use serde_json::{json, Value};

/// A small but realistic catalog covering the families and quality tiers
/// the engine distinguishes.
pub fn catalog_document() -> Value {
    json!({
        "version": "1.0.0",
        "generated_at": "2026-03-01T00:00:00Z",
        "source_repo": "example/architecture-catalog",
        "architectures": [
            {
                "architecture_id": "iaas-vm-single",
                "name": "Single-region IaaS virtual machines",
                "description": "Lift-and-shift onto Azure VMs with availability sets.",
                "learn_url": "https://learn.example.com/iaas-vm",
                "family": "iaas",
                "workload_domain": "general",
                "expected_runtime_models": ["monolith", "n_tier", "mixed"],
                "supported_treatments": ["rehost", "tolerate"],
                "supported_time_categories": ["tolerate", "migrate"],
                "availability_models": ["single_region", "single_region_ha"],
                "security_level": "enterprise",
                "operating_model_required": "traditional_it",
                "cost_profile": "cost_minimized",
                "complexity": "low",
                "core_services": ["azure_virtual_machines"],
                "supporting_services": ["azure_monitor"],
                "browse_tags": ["lift_and_shift", "virtual_machines"],
                "catalog_quality": "curated"
            },
            {
                "architecture_id": "iaas-avs",
                "name": "Azure VMware Solution estate",
                "family": "iaas",
                "workload_domain": "infrastructure",
                "expected_runtime_models": ["mixed"],
                "supported_treatments": ["rehost"],
                "availability_models": ["single_region", "multi_region"],
                "security_level": "enterprise",
                "operating_model_required": "traditional_it",
                "cost_profile": "balanced",
                "complexity": "medium",
                "core_services": ["azure_vmware_solution"],
                "browse_tags": ["vmware", "datacenter_exit"],
                "not_suitable_for": ["single_vm_workloads"],
                "catalog_quality": "ai_enriched"
            },
            {
                "architecture_id": "paas-webapp",
                "name": "App Service web application",
                "learn_url": "https://learn.example.com/paas-webapp",
                "family": "paas",
                "workload_domain": "web",
                "expected_runtime_models": ["monolith", "n_tier", "api"],
                "supported_treatments": ["replatform", "refactor"],
                "supported_time_categories": ["migrate", "invest"],
                "availability_models": ["single_region_ha", "multi_region"],
                "security_level": "enterprise",
                "operating_model_required": "transitional",
                "cost_profile": "balanced",
                "complexity": "medium",
                "core_services": ["azure_app_service", "azure_sql_database"],
                "browse_tags": ["web", "internet_facing", "waf"],
                "catalog_quality": "curated"
            },
            {
                "architecture_id": "aks-microservices",
                "name": "AKS microservices platform",
                "learn_url": "https://learn.example.com/aks",
                "family": "cloud_native",
                "workload_domain": "web",
                "expected_runtime_models": ["microservices", "api", "event_driven"],
                "supported_treatments": ["refactor", "rebuild"],
                "supported_time_categories": ["invest"],
                "availability_models": ["multi_region", "active_active"],
                "security_level": "regulated",
                "operating_model_required": "devops",
                "cost_profile": "innovation_first",
                "complexity": "high",
                "core_services": ["azure_kubernetes_service"],
                "supporting_services": ["azure_container_registry", "azure_monitor"],
                "browse_tags": ["containers", "internet_facing", "waf"],
                "catalog_quality": "curated"
            },
            {
                "architecture_id": "aks-regulated",
                "name": "Regulated AKS landing zone",
                "family": "cloud_native",
                "workload_domain": "security",
                "expected_runtime_models": ["microservices", "api"],
                "supported_treatments": ["refactor"],
                "availability_models": ["active_active"],
                "security_level": "highly_regulated",
                "operating_model_required": "sre",
                "cost_profile": "scale_optimized",
                "complexity": "high",
                "core_services": ["azure_kubernetes_service", "azure_firewall"],
                "browse_tags": ["containers", "compliance"],
                "catalog_quality": "curated"
            },
            {
                "architecture_id": "regulated-baseline",
                "name": "Regulated IaaS baseline",
                "family": "foundation",
                "workload_domain": "security",
                "expected_runtime_models": ["monolith", "n_tier", "mixed"],
                "supported_treatments": ["rehost", "replatform", "tolerate"],
                "availability_models": ["single_region_ha", "multi_region"],
                "security_level": "highly_regulated",
                "operating_model_required": "transitional",
                "cost_profile": "balanced",
                "complexity": "high",
                "core_services": ["azure_virtual_machines", "azure_firewall"],
                "browse_tags": ["compliance", "landing_zone"],
                "catalog_quality": "curated"
            },
            {
                "architecture_id": "data-analytics",
                "name": "Analytics lakehouse sketch",
                "family": "data",
                "workload_domain": "data",
                "expected_runtime_models": ["batch", "mixed"],
                "supported_treatments": ["rehost", "replatform", "refactor"],
                "availability_models": ["single_region"],
                "security_level": "basic",
                "operating_model_required": "traditional_it",
                "cost_profile": "balanced",
                "complexity": "medium",
                "core_services": ["azure_databricks"],
                "browse_tags": ["analytics"],
                "catalog_quality": "example_only"
            }
        ]
    })
}

pub fn catalog_json() -> String {
    catalog_document().to_string()
}

/// Scenario 1: lift-and-shift VM app.
pub fn lift_and_shift_context() -> Value {
    json!({
        "app_overview": {
            "application": "inventory-tracker",
            "business_crtiticality": "medium",
            "treatment": "rehost"
        },
        "server_details": [
            { "server_name": "invtrk01", "environment": "prod", "os": "Windows Server 2019" }
        ]
    })
}

/// Scenario 2: mission-critical cloud-native web app.
pub fn cloud_native_context() -> Value {
    json!({
        "app_overview": {
            "application": "storefront",
            "app_type": "web",
            "business_crtiticality": "MissionCritical",
            "treatment": "refactor",
            "compliance_keywords": ["SOC2"]
        },
        "detected_technology_running": [
            { "tech": "Java" },
            { "tech": "Docker" },
            { "tech": "Terraform" },
            { "tech": "GitHub Actions" }
        ],
        "app_approved_azure_services": [
            { "tech": "java", "approved_service": "AKS" },
            { "tech": "sql server", "approved_service": "Azure SQL Database" },
            { "tech": "redis", "approved_service": "Azure Cache for Redis" }
        ],
        "server_details": [
            { "server_name": "web01", "role": "web" },
            { "server_name": "web02", "role": "web" },
            { "server_name": "db01", "role": "db" }
        ],
        "App Mod results": [
            {
                "platform": "AKS",
                "status": "Supported",
                "container_ready": true,
                "recommended_targets": ["AKS"]
            }
        ]
    })
}

/// Scenario 3: regulated workload, low-maturity team.
pub fn regulated_context() -> Value {
    json!({
        "app_overview": {
            "application": "claims-processing",
            "business_crtiticality": "high",
            "compliance_keywords": ["HIPAA"]
        },
        "server_details": [
            { "server_name": "clm01", "role": "web" },
            { "server_name": "clm02", "role": "app" },
            { "server_name": "clm03", "role": "db" }
        ]
    })
}

/// Scenario 4: sparse context — a name and three anonymous servers.
pub fn sparse_context() -> Value {
    json!({
        "app_overview": { "application": "mystery-app" },
        "server_details": [
            { "server_name": "srv01" },
            { "server_name": "srv02" },
            { "server_name": "srv03" }
        ]
    })
}

/// Scenario 5: container tech present but App-Mod rules AKS out.
pub fn app_mod_blocked_context() -> Value {
    json!({
        "app_overview": { "application": "legacy-erp" },
        "detected_technology_running": [
            { "tech": "Docker" },
            { "tech": "Java" }
        ],
        "App Mod results": [
            { "platform": "AKS", "status": "NotSupported" }
        ]
    })
}
