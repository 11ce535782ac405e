use belugahook_yield_source::{YieldSourceVault, YieldSourceVaultClient};
use soroban_sdk::{testutils::Address as _, token::StellarAssetClient, Address, Env};

pub struct Setup<'a> {
    pub source: YieldSourceVaultClient<'a>,
    pub admin: Address,
    pub asset: Address,
}

/// Register a token and a yield source managing it
pub fn setup(env: &Env) -> Setup<'_> {
    let admin = Address::generate(env);
    let asset = create_token(env, &admin);

    let id = env.register(YieldSourceVault, ());
    let source = YieldSourceVaultClient::new(env, &id);
    source.initialize(&admin, &asset);

    Setup { source, admin, asset }
}

pub fn create_token(env: &Env, admin: &Address) -> Address {
    env.register_stellar_asset_contract_v2(admin.clone()).address()
}

pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    StellarAssetClient::new(env, token).mint(to, &amount);
}
