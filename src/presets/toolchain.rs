//! Toolchain settings preset
//!
//! The base tree for the compiler toolchain: deployment networks, the
//! compiler list, reporter and exporter tooling, and output paths. Account
//! material and API keys come from the [`Environment`].

use serde_json::{json, Value};

use crate::env::Environment;
use crate::merge::{merge, MergeError};

/// Funded balance for each mnemonic-backed test account.
const TEST_ACCOUNT_BALANCE: &str = "9900000000000000000000";

/// Pool balance for the junk-mnemonic account set.
const DEFAULT_ACCOUNTS_BALANCE: &str = "990000000000000000000";

/// Standard throwaway mnemonic for the in-process network.
const JUNK_MNEMONIC: &str = "test test test test test test test test test test test junk";

/// Mainnet block the forked in-process network is pinned to.
const FORK_BLOCK_NUMBER: u64 = 11_829_739;

/// Compiler releases offered by default, all optimizer-enabled at 200 runs.
const SOLC_VERSIONS: [&str; 5] = ["0.6.12", "0.8.7", "0.8.4", "0.7.5", "0.7.6"];

/// Merge user settings over the toolchain defaults.
pub fn settings(env: &Environment, user: Option<&Value>) -> Result<Value, MergeError> {
    merge(&defaults(env), user.unwrap_or(&Value::Null))
}

/// Build the toolchain base tree.
pub fn defaults(env: &Environment) -> Value {
    json!({
        "defaultNetwork": "hardhat",
        "namedAccounts": {},
        "gasReporter": {
            "currency": "USD",
            "gasPrice": 50,
            "enabled": true,
            "src": "./contracts",
        },
        "etherscan": {
            "apiKey": env.etherscan_api_key.clone(),
        },
        "contractSizer": {
            "alphaSort": true,
            "runOnCompile": true,
            "disambiguatePaths": false,
        },
        "abiExporter": {
            "path": "./data/abi",
            "clear": true,
            "flat": true,
            "only": [],
            "spacing": 2,
        },
        "networks": networks(env),
        "paths": {
            "artifacts": "artifacts",
            "cache": "cache",
            "deploy": "deploy",
            "deployments": "deployments",
            "imports": "imports",
            "sources": "contracts",
            "tests": "test",
        },
        "solidity": compilers(),
        "ovm": ovm(),
    })
}

/// Account list used by live networks for deployments.
///
/// Precedence, lowest to highest: env mnemonics, the secret store's
/// `MAINNET_PRIVATE_KEY`, then `PRIVATE_KEY`.
fn deploy_accounts(env: &Environment) -> Value {
    let mut accounts = match (&env.mnemonic, &env.funder_mnemonic) {
        (Some(mnemonic), Some(funder)) => json!([mnemonic, funder]),
        _ => json!([]),
    };

    if let Some(key) = env
        .secrets
        .as_ref()
        .and_then(|secrets| secrets.get("MAINNET_PRIVATE_KEY"))
    {
        accounts = json!([format!("0x{key}")]);
    }
    if let Some(key) = &env.private_key {
        accounts = json!([format!("0x{key}")]);
    }

    accounts
}

/// Account set for the in-process network.
///
/// With both mnemonics present each account is funded individually;
/// otherwise the junk mnemonic covers the whole set.
fn test_accounts(env: &Environment) -> Value {
    match (&env.mnemonic, &env.funder_mnemonic) {
        (Some(mnemonic), Some(funder)) => json!([
            { "mnemonic": mnemonic, "balance": TEST_ACCOUNT_BALANCE },
            { "mnemonic": funder, "balance": TEST_ACCOUNT_BALANCE },
        ]),
        _ => json!({
            "mnemonic": JUNK_MNEMONIC,
            "accountsBalance": DEFAULT_ACCOUNTS_BALANCE,
        }),
    }
}

/// The network catalog: the in-process network plus the named live targets.
fn networks(env: &Environment) -> Value {
    let accounts = deploy_accounts(env);
    let infura = env.infura_api_key.as_deref().unwrap_or_default();
    let alchemy = env.alchemy_api_key.as_deref().unwrap_or_default();

    let mut hardhat = json!({
        "blockGasLimit": 10_000_000,
        "chainId": 31337,
        "accounts": test_accounts(env),
    });
    if env.alchemy_api_key.is_some() {
        hardhat["forking"] = json!({
            "url": format!("https://eth-mainnet.alchemyapi.io/v2/{alchemy}"),
            "blockNumber": FORK_BLOCK_NUMBER,
        });
    }

    let mut metis = live_network("https://rocketfuel.metis.io/?owner=435", &accounts, 435);
    metis["gasPrice"] = json!(15_000_000);
    metis["ovm"] = json!(true);

    json!({
        "hardhat": hardhat,
        "mainnet": {
            "url": format!("https://mainnet.infura.io/v3/{infura}"),
            "accounts": &accounts,
            "chainId": 1,
            "hardhat": {
                "forking": {
                    "enabled": false,
                    "url": format!("https://eth-mainnet.alchemyapi.io/v2/{alchemy}"),
                },
            },
        },
        "ropsten": staging_network(format!("https://ropsten.infura.io/v3/{infura}"), &accounts, 3),
        "rinkeby": staging_network(format!("https://rinkeby.infura.io/v3/{infura}"), &accounts, 4),
        "goerli": staging_network(format!("https://goerli.infura.io/v3/{infura}"), &accounts, 5),
        "kovan": staging_network(format!("https://kovan.infura.io/v3/{infura}"), &accounts, 42),
        "moonbase": staging_network("https://rpc.testnet.moonbeam.network", &accounts, 1287),
        "arbitrum": staging_network("https://kovan3.arbitrum.io/rpc", &accounts, 79_377_087_078_960),
        "binance": live_network("https://bsc-dataseed.binance.org/", &accounts, 56),
        "binancetest": staging_network("https://data-seed-prebsc-1-s1.binance.org:8545/", &accounts, 97),
        "matic": live_network("https://rpc-mainnet.maticvigil.com/", &accounts, 137),
        "fantom": live_network("https://rpcapi.fantom.network", &accounts, 250),
        "fantomtest": staging_network("https://rpc.testnet.fantom.network/", &accounts, 4002),
        "avalanche": live_network("https://ava.spacejelly.network/api/ext/bc/C/rpc", &accounts, 43114),
        "fuji": staging_network("https://api.avax-test.network/ext/bc/C/rpc", &accounts, 43113),
        "mumbai": staging_network("https://rpc-mumbai.maticvigil.com/", &accounts, 80001),
        "huobi": live_network("https://http-mainnet.hecochain.com", &accounts, 128),
        "huobitest": staging_network("https://http-testnet.hecochain.com", &accounts, 256),
        "okex": live_network("http://okexchain-rpc1.okex.com:26659", &accounts, 66),
        "okextest": staging_network("http://okexchaintest-rpc1.okex.com:26659", &accounts, 65),
        "xdai": live_network("https://rpc.xdaichain.com", &accounts, 100),
        "tomo": live_network("https://rpc.tomochain.com", &accounts, 88),
        "tomotest": staging_network("https://rpc.testnet.tomochain.com", &accounts, 89),
        "metis": metis,
    })
}

/// Live network entry with deployment tracking enabled.
fn live_network(url: impl Into<String>, accounts: &Value, chain_id: u64) -> Value {
    json!({
        "url": url.into(),
        "accounts": accounts,
        "chainId": chain_id,
        "live": true,
        "saveDeployments": true,
    })
}

/// Live network entry tagged for staging deployments.
fn staging_network(url: impl Into<String>, accounts: &Value, chain_id: u64) -> Value {
    let mut network = live_network(url, accounts, chain_id);
    network["tags"] = json!(["staging"]);
    network
}

fn compilers() -> Value {
    let compilers: Vec<Value> = SOLC_VERSIONS
        .iter()
        .map(|version| {
            json!({
                "version": version,
                "settings": {
                    "optimizer": { "enabled": true, "runs": 200 },
                },
            })
        })
        .collect();
    json!({ "compilers": compilers })
}

/// OVM compiler settings; only 0.5.16, 0.6.12 and 0.7.6 are supported.
fn ovm() -> Value {
    json!({
        "solcVersion": "0.7.6",
        "optimizer": true,
        "runs": 20,
    })
}
