//! Canonical technology and platform dictionaries.
//!
//! Detected technologies are only admitted when they canonicalize against
//! the allow-list; prose fragments from free-text assessment fields are
//! rejected outright. The platform dictionary maps App-Mod platform
//! spellings and approved-service names onto the canonical cloud-service
//! names used by catalog `core_services`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// Connectives, articles, or sentence punctuation mark a prose fragment,
/// not a technology name. Dots are allowed; they appear in legitimate names
/// like `.NET` and `Node.js`.
static PROSE_FRAGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[;:!?,]|\b(and|or|with|the|a|an|for|that|which|uses|using|runs|on)\b")
        .expect("prose fragment regex is valid")
});

const MAX_TECH_NAME_LEN: usize = 40;

static TECH_ALIASES: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        // Languages and runtimes
        ("java", "java"),
        ("jdk", "java"),
        ("dotnet", "dotnet"),
        (".net", "dotnet"),
        (".net core", "dotnet"),
        (".net framework", "dotnet_framework"),
        ("dotnet framework", "dotnet_framework"),
        ("nodejs", "nodejs"),
        ("node.js", "nodejs"),
        ("node", "nodejs"),
        ("python", "python"),
        ("php", "php"),
        ("ruby", "ruby"),
        ("go", "go"),
        ("golang", "go"),
        // Web and app servers
        ("iis", "iis"),
        ("tomcat", "apache_tomcat"),
        ("apache tomcat", "apache_tomcat"),
        ("nginx", "nginx"),
        ("apache", "apache_httpd"),
        ("httpd", "apache_httpd"),
        // Data stores
        ("sql server", "sql_server"),
        ("sqlserver", "sql_server"),
        ("mssql", "sql_server"),
        ("mysql", "mysql"),
        ("postgres", "postgresql"),
        ("postgresql", "postgresql"),
        ("oracle", "oracle_db"),
        ("oracle database", "oracle_db"),
        ("mongodb", "mongodb"),
        ("redis", "redis"),
        ("elasticsearch", "elasticsearch"),
        // Messaging and streaming
        ("rabbitmq", "rabbitmq"),
        ("kafka", "kafka"),
        ("apache kafka", "kafka"),
        ("servicebus", "azure_service_bus"),
        ("service bus", "azure_service_bus"),
        // Containers and orchestration
        ("docker", "docker"),
        ("kubernetes", "kubernetes"),
        ("k8s", "kubernetes"),
        ("helm", "helm"),
        // Analytics and AI
        ("databricks", "databricks"),
        ("spark", "spark"),
        ("azure openai", "azure_openai"),
        ("openai", "azure_openai"),
        // Delivery tooling
        ("jenkins", "jenkins"),
        ("azure devops", "azure_devops"),
        ("github actions", "github_actions"),
        ("gitlab", "gitlab_ci"),
        ("gitlab ci", "gitlab_ci"),
        ("terraform", "terraform"),
        ("ansible", "ansible"),
        ("bicep", "bicep"),
        ("pulumi", "pulumi"),
        ("prometheus", "prometheus"),
        ("grafana", "grafana"),
        // Platforms
        ("windows server", "windows_server"),
        ("windows", "windows_server"),
        ("linux", "linux"),
        ("sap", "sap"),
        ("sharepoint", "sharepoint"),
        ("citrix", "citrix"),
        // Frontend
        ("react", "react"),
        ("angular", "angular"),
        ("vue", "vue"),
    ])
});

static PLATFORM_SERVICES: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        ("aks", "azure_kubernetes_service"),
        ("azure kubernetes service", "azure_kubernetes_service"),
        ("azure_kubernetes_service", "azure_kubernetes_service"),
        ("kubernetes", "azure_kubernetes_service"),
        ("app service", "azure_app_service"),
        ("appservice", "azure_app_service"),
        ("azure app service", "azure_app_service"),
        ("azure_app_service", "azure_app_service"),
        ("container apps", "azure_container_apps"),
        ("azure container apps", "azure_container_apps"),
        ("azure_container_apps", "azure_container_apps"),
        ("aca", "azure_container_apps"),
        ("functions", "azure_functions"),
        ("azure functions", "azure_functions"),
        ("azure_functions", "azure_functions"),
        ("virtual machines", "azure_virtual_machines"),
        ("azure vm", "azure_virtual_machines"),
        ("azure vms", "azure_virtual_machines"),
        ("azure_virtual_machines", "azure_virtual_machines"),
        ("vm", "azure_virtual_machines"),
        ("avs", "azure_vmware_solution"),
        ("azure vmware solution", "azure_vmware_solution"),
        ("azure_vmware_solution", "azure_vmware_solution"),
        ("sql mi", "azure_sql_managed_instance"),
        ("sql managed instance", "azure_sql_managed_instance"),
        ("azure_sql_managed_instance", "azure_sql_managed_instance"),
        ("azure sql", "azure_sql_database"),
        ("azure sql database", "azure_sql_database"),
        ("azure_sql_database", "azure_sql_database"),
        ("spring apps", "azure_spring_apps"),
        ("azure spring apps", "azure_spring_apps"),
        ("azure_spring_apps", "azure_spring_apps"),
    ])
});

/// Container-hosting platforms, used to read container feasibility out of
/// App-Mod results.
pub const CONTAINER_PLATFORM_SERVICES: [&str; 2] =
    ["azure_kubernetes_service", "azure_container_apps"];

fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True when the text reads like a sentence fragment rather than a name.
pub fn is_prose_fragment(raw: &str) -> bool {
    raw.trim().len() > MAX_TECH_NAME_LEN || PROSE_FRAGMENT.is_match(raw)
}

/// Canonicalize a detected technology against the allow-list. The lookup
/// runs first so dotted names like `.NET` survive; prose fragments and
/// unlisted names yield `None`.
pub fn canonicalize_technology(raw: &str) -> Option<&'static str> {
    if let Some(canonical) = TECH_ALIASES.get(normalize_key(raw).as_str()) {
        return Some(canonical);
    }
    None
}

/// Canonical cloud-service name for an App-Mod platform or approved-service
/// spelling.
pub fn canonicalize_platform(raw: &str) -> Option<&'static str> {
    PLATFORM_SERVICES.get(normalize_key(raw).as_str()).copied()
}

/// Canonical service name used when the spelling is unknown to the
/// dictionary: lowercased with underscores, so exact catalog matches still
/// work for services the dictionary has not caught up with.
pub fn fallback_service_name(raw: &str) -> String {
    normalize_key(raw).replace(' ', "_")
}

pub fn is_ci_cd_technology(canonical: &str) -> bool {
    matches!(canonical, "jenkins" | "azure_devops" | "github_actions" | "gitlab_ci")
}

pub fn is_iac_technology(canonical: &str) -> bool {
    matches!(canonical, "terraform" | "ansible" | "bicep" | "pulumi")
}

pub fn is_sre_technology(canonical: &str) -> bool {
    matches!(canonical, "prometheus" | "grafana")
}

pub fn is_innovation_technology(canonical: &str) -> bool {
    matches!(
        canonical,
        "kubernetes" | "kafka" | "databricks" | "spark" | "azure_openai"
    )
}

pub fn is_container_technology(canonical: &str) -> bool {
    matches!(canonical, "docker" | "kubernetes" | "helm")
}

/// Legacy OS markers in server inventories.
pub fn is_legacy_os(os: &str) -> bool {
    let os = os.to_lowercase();
    ["2003", "2008", "2012", "centos 6", "rhel 5", "rhel 6", "windows xp"]
        .iter()
        .any(|marker| os.contains(marker))
}
