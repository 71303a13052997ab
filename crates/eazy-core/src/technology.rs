//! # Technology Allowlist
//!
//! The fixed set of technology tags a course may declare in its
//! `technologies` field. Tags are lowercase and hyphenated. Extending the
//! list is a source edit; there is no runtime configuration for it.

use std::collections::HashSet;
use std::sync::LazyLock;

const LANGUAGES: &[&str] = &[
    "python", "java", "c", "c++", "c-sharp", "javascript", "typescript", "ruby", "php", "go",
    "rust", "kotlin", "swift", "scala", "perl", "dart", "bash", "powershell", "r", "sql",
];

const CONTAINERS: &[&str] = &[
    "docker", "podman", "kubernetes", "openshift", "docker-compose", "cri-o", "containerd",
    "helm", "rancher", "docker-swarm",
];

const CLOUD: &[&str] = &[
    "aws", "azure", "gcp", "ibm-cloud", "oracle-cloud", "alibaba-cloud", "ec2", "s3", "rds",
    "eks", "lambda", "azure-vm", "azure-functions", "cloud-run", "firebase", "cloudflare",
];

const DATABASES: &[&str] = &[
    "postgresql", "mysql", "mariadb", "sql-server", "oracle-db", "mongodb", "cassandra",
    "dynamodb", "redis", "couchbase", "neo4j", "arangodb", "influxdb", "prometheus", "timescale",
];

const DEVOPS: &[&str] = &[
    "terraform", "ansible", "chef", "puppet", "packer", "vault", "consul", "jenkins",
    "gitlab-ci", "github-actions", "spinnaker", "argo-cd", "flux",
];

const SECURITY: &[&str] = &[
    "nmap", "wireshark", "burp-suite", "metasploit", "nessus", "kali-linux", "trivy", "fail2ban",
];

const OBSERVABILITY: &[&str] = &[
    "grafana", "datadog", "splunk", "new-relic", "elasticsearch", "kibana", "fluentd",
    "opentelemetry", "jaeger",
];

const WEB: &[&str] = &[
    "react", "angular", "vue", "svelte", "nextjs", "nuxtjs", "tailwindcss", "bootstrap",
    "material-ui", "express", "django", "flask", "fastapi", "spring", "laravel", "rails",
    "asp-net",
];

const MACHINE_LEARNING: &[&str] = &[
    "tensorflow", "pytorch", "keras", "scikit-learn", "numpy", "pandas", "opencv",
    "huggingface", "mlflow", "kubeflow",
];

const BIG_DATA: &[&str] = &[
    "hadoop", "spark", "kafka", "hive", "pig", "flink", "presto", "dremio",
];

const OPERATING_SYSTEMS: &[&str] = &[
    "linux", "windows", "macos", "ubuntu", "centos", "debian", "fedora", "redhat", "alpine",
];

const COLLABORATION: &[&str] = &[
    "git", "github", "gitlab", "bitbucket", "mercurial", "svn", "jira", "trello", "confluence",
    "slack", "teams",
];

const DATA_TOOLS: &[&str] = &[
    "excel", "power-bi", "tableau", "looker", "metabase", "superset", "airflow", "dbt",
    "jupyter",
];

const NETWORKING: &[&str] = &[
    "tcp-ip", "dns", "dhcp", "http", "vpn", "nginx", "haproxy", "traefik", "istio", "cisco",
];

const DOMAINS: &[&str] = &[
    "devops", "cloud", "security", "networking", "data-science", "machine-learning", "big-data",
    "web-development", "automation", "monitoring", "ci-cd", "microservices",
];

const GROUPS: &[&[&str]] = &[
    LANGUAGES,
    CONTAINERS,
    CLOUD,
    DATABASES,
    DEVOPS,
    SECURITY,
    OBSERVABILITY,
    WEB,
    MACHINE_LEARNING,
    BIG_DATA,
    OPERATING_SYSTEMS,
    COLLABORATION,
    DATA_TOOLS,
    NETWORKING,
    DOMAINS,
];

static ALLOWED: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| GROUPS.iter().flat_map(|group| group.iter().copied()).collect());

/// Returns true if `tag` is a recognized technology. Matching is exact and
/// case-sensitive.
pub fn is_allowed(tag: &str) -> bool {
    ALLOWED.contains(tag)
}

/// Returns the tags of `tags` that are not on the allowlist, in input order.
pub fn invalid_technologies<'a, I>(tags: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    tags.into_iter().filter(|tag| !is_allowed(tag)).collect()
}

/// Iterates every allowed tag, grouped by domain.
pub fn all() -> impl Iterator<Item = &'static str> {
    GROUPS.iter().flat_map(|group| group.iter().copied())
}
