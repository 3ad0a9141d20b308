pub(crate) const DEFAULT_USER_AGENT: &str = "vuln-Rate-Limiting-Tester/1.0";
