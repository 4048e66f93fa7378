//! Per-network explorer and Safe service URLs.

use alloy_primitives::Address;

/// Service endpoints known for a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Network {
    /// EIP-155 chain id.
    pub chain_id: u64,
    /// Human-readable name.
    pub name: &'static str,
    /// Block explorer base URL.
    pub etherscan: Option<&'static str>,
    /// Safe transaction service base URL.
    pub tx_service: Option<&'static str>,
    /// Safe relay service base URL.
    pub relay_service: Option<&'static str>,
}

const KNOWN_NETWORKS: [Network; 5] = [
    Network {
        chain_id: 1,
        name: "mainnet",
        etherscan: Some("https://etherscan.io"),
        tx_service: Some("https://safe-transaction.mainnet.gnosis.io"),
        relay_service: Some("https://safe-relay.gnosis.io"),
    },
    Network {
        chain_id: 3,
        name: "ropsten",
        etherscan: Some("https://ropsten.etherscan.io"),
        tx_service: None,
        relay_service: None,
    },
    Network {
        chain_id: 4,
        name: "rinkeby",
        etherscan: Some("https://rinkeby.etherscan.io"),
        tx_service: Some("https://safe-transaction.rinkeby.gnosis.io"),
        relay_service: Some("https://safe-relay.rinkeby.gnosis.io"),
    },
    Network {
        chain_id: 5,
        name: "goerli",
        etherscan: Some("https://goerli.etherscan.io"),
        tx_service: None,
        relay_service: None,
    },
    Network {
        chain_id: 42,
        name: "kovan",
        etherscan: Some("https://kovan.etherscan.io"),
        tx_service: None,
        relay_service: None,
    },
];

impl Network {
    /// Look up a chain; unknown chains get no service URLs.
    #[must_use]
    pub fn from_chain_id(chain_id: u64) -> Self {
        KNOWN_NETWORKS
            .iter()
            .find(|network| network.chain_id == chain_id)
            .copied()
            .unwrap_or(Self {
                chain_id,
                name: "unknown",
                etherscan: None,
                tx_service: None,
                relay_service: None,
            })
    }

    /// Transactions endpoint of the tx service for `safe`.
    #[must_use]
    pub fn tx_service_url(&self, safe: &Address) -> Option<String> {
        self.tx_service
            .map(|base| format!("{base}/api/v1/safes/{safe}/transactions/"))
    }

    /// Transactions endpoint of the relay service for `safe`.
    #[must_use]
    pub fn relay_service_url(&self, safe: &Address) -> Option<String> {
        self.relay_service
            .map(|base| format!("{base}/api/v1/safes/{safe}/transactions/"))
    }

    /// Explorer page for `safe`.
    #[must_use]
    pub fn etherscan_url(&self, safe: &Address) -> Option<String> {
        self.etherscan.map(|base| format!("{base}/address/{safe}"))
    }
}
