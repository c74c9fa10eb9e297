// SPDX-License-Identifier: Apache-2.0

use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{ErrorKind, NetmanError};

/// Prefix of the conventional VLAN domain name, `VLAN1000` for VLAN 1000.
pub const VLAN_NAME_PREFIX: &str = "VLAN";

// Ranges are expanded into sets, hence capped to what a 802.1Q tag can hold.
pub(crate) const MAX_VLAN_ID: u32 = 4095;

static VLAN_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("Invalid regex pattern"));
static VLAN_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)-([0-9]+)$").expect("Invalid regex pattern")
});

pub fn vlan_domain_name(vlan_id: u32) -> String {
    format!("{VLAN_NAME_PREFIX}{vlan_id}")
}

/// VLAN configuration object of a single fetched snapshot
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub struct VlanDomain {
    pub vlan_id: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
}

impl VlanDomain {
    pub fn new(vlan_id: u32) -> Self {
        Self {
            vlan_id,
            ..Default::default()
        }
    }

    /// Device name of this domain, falling back to the naming convention.
    pub fn name_or_default(&self) -> String {
        match self.name.as_deref() {
            Some(n) => n.to_string(),
            None => vlan_domain_name(self.vlan_id),
        }
    }
}

/// Map of VLAN domain name to VLAN ID used to resolve symbolic membership.
pub fn vlan_name_table(domains: &[VlanDomain]) -> HashMap<String, u32> {
    domains
        .iter()
        .filter_map(|d| d.name.as_ref().map(|n| (n.to_string(), d.vlan_id)))
        .collect()
}

/// What to do with membership entries naming an unknown VLAN domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnresolvedPolicy {
    /// Raise [ErrorKind::UnresolvableVlanReference]
    Fail,
    /// Treat the entry as matching no VLAN
    #[default]
    Skip,
}

fn parse_vlan_id(token: &str, entry: &str) -> Result<u32, NetmanError> {
    token.parse::<u32>().map_err(|e| {
        NetmanError::new(
            ErrorKind::InvalidVlanReference,
            format!("Invalid VLAN ID {token} in membership entry {entry}: {e}"),
        )
    })
}

fn resolve_entry(
    entry: &str,
    name_table: &HashMap<String, u32>,
    policy: UnresolvedPolicy,
    resolved: &mut BTreeSet<u32>,
) -> Result<(), NetmanError> {
    if VLAN_ID_RE.is_match(entry) {
        resolved.insert(parse_vlan_id(entry, entry)?);
    } else if let Some(caps) = VLAN_RANGE_RE.captures(entry) {
        let min = parse_vlan_id(&caps[1], entry)?;
        let max = parse_vlan_id(&caps[2], entry)?;
        if min > max {
            return Err(NetmanError::new(
                ErrorKind::InvalidVlanReference,
                format!("VLAN range {entry} is out of order"),
            ));
        }
        if max > MAX_VLAN_ID {
            return Err(NetmanError::new(
                ErrorKind::InvalidVlanReference,
                format!(
                    "VLAN range {entry} exceeds the maximum VLAN ID \
                     {MAX_VLAN_ID}"
                ),
            ));
        }
        resolved.extend(min..=max);
    } else if let Some(vlan_id) = name_table.get(entry) {
        resolved.insert(*vlan_id);
    } else {
        match policy {
            UnresolvedPolicy::Fail => {
                return Err(NetmanError::new(
                    ErrorKind::UnresolvableVlanReference,
                    format!("VLAN {entry} not found"),
                ));
            }
            UnresolvedPolicy::Skip => {
                log::warn!(
                    "Ignoring VLAN membership entry {entry}: no such VLAN \
                     domain"
                );
            }
        }
    }
    Ok(())
}

/// Expand raw `vlan-id-list` entries (ID, `A-B` range or domain name) into
/// VLAN IDs.
pub fn resolve_vlan_members(
    entries: &[String],
    name_table: &HashMap<String, u32>,
    policy: UnresolvedPolicy,
) -> Result<BTreeSet<u32>, NetmanError> {
    let mut ret = BTreeSet::new();
    for entry in entries {
        resolve_entry(entry.trim(), name_table, policy, &mut ret)?;
    }
    Ok(ret)
}
