/// Outcome of classifying one input string.
///
/// `Malformed` is a normal, expected result (empty input, unrecognized
/// suffix, bad registered-domain label), not an error: callers branch on
/// the variant instead of handling an error channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractResult {
    /// Input could not be resolved into a registrable domain or IP literal.
    Malformed,
    /// A hostname with a recognized public suffix.
    Domain {
        /// Labels left of the registered domain, joined with `.`.
        /// Empty when the host had no labels beyond the registered domain.
        subdomain: String,
        /// The single label immediately left of the public suffix.
        domain: String,
        /// The matched public suffix (one or more labels, joined with `.`).
        suffix: String,
    },
    /// A syntactically valid IPv4 literal.
    Ipv4 { address: String },
    /// A syntactically valid IPv6 literal.
    Ipv6 { address: String },
}

impl ExtractResult {
    /// Convenience accessor for the registrable name: the registered domain
    /// for `Domain` results, the literal for IP results.
    pub fn registrable(&self) -> Option<&str> {
        match self {
            ExtractResult::Domain { domain, .. } => Some(domain),
            ExtractResult::Ipv4 { address } | ExtractResult::Ipv6 { address } => Some(address),
            ExtractResult::Malformed => None,
        }
    }

    /// Rejoin a `Domain` result into the normalized host it was split from.
    pub fn to_host(&self) -> Option<String> {
        match self {
            ExtractResult::Domain {
                subdomain,
                domain,
                suffix,
            } => {
                if subdomain.is_empty() {
                    Some(format!("{}.{}", domain, suffix))
                } else {
                    Some(format!("{}.{}.{}", subdomain, domain, suffix))
                }
            }
            _ => None,
        }
    }
}
