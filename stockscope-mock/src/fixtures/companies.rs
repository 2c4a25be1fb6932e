use rust_decimal::Decimal;
use stockscope_core::{CompanyProfile, Symbol};

pub struct Company {
    pub symbol: &'static str,
    pub name: &'static str,
    pub exchange: &'static str,
    pub currency: &'static str,
    /// Price in cents.
    pub price: i64,
    /// Change in hundredths of a percent.
    pub changes: i64,
    pub mkt_cap: i64,
    pub description: Option<&'static str>,
    pub website: Option<&'static str>,
    pub has_logo: bool,
}

pub const COMPANIES: &[Company] = &[
    Company {
        symbol: "AAPL",
        name: "Apple Inc.",
        exchange: "NASDAQ",
        currency: "USD",
        price: 18984,
        changes: 125,
        mkt_cap: 2_950_000_000_000,
        description: Some("Designs and sells smartphones, personal computers, and wearables."),
        website: Some("https://www.apple.com"),
        has_logo: true,
    },
    Company {
        symbol: "MSFT",
        name: "Microsoft Corporation",
        exchange: "NASDAQ",
        currency: "USD",
        price: 41550,
        changes: -210,
        mkt_cap: 3_090_000_000_000,
        description: Some("Develops software, cloud services, and devices."),
        website: Some("https://www.microsoft.com"),
        has_logo: true,
    },
    Company {
        symbol: "GOOGL",
        name: "Alphabet Inc.",
        exchange: "NASDAQ",
        currency: "USD",
        price: 17263,
        changes: 87,
        mkt_cap: 2_140_000_000_000,
        description: Some("Holding company for Google search, advertising, and cloud."),
        website: Some("https://abc.xyz"),
        has_logo: true,
    },
    Company {
        symbol: "AMZN",
        name: "Amazon.com, Inc.",
        exchange: "NASDAQ",
        currency: "USD",
        price: 18366,
        changes: -45,
        mkt_cap: 1_910_000_000_000,
        description: Some("Online retail, logistics, and cloud infrastructure."),
        website: Some("https://www.amazon.com"),
        has_logo: true,
    },
    Company {
        symbol: "NVDA",
        name: "NVIDIA Corporation",
        exchange: "NASDAQ",
        currency: "USD",
        price: 12354,
        changes: 312,
        mkt_cap: 3_040_000_000_000,
        description: Some("Graphics processors and accelerated computing platforms."),
        website: Some("https://www.nvidia.com"),
        has_logo: true,
    },
    Company {
        symbol: "TSLA",
        name: "Tesla, Inc.",
        exchange: "NASDAQ",
        currency: "USD",
        price: 19788,
        changes: -456,
        mkt_cap: 631_000_000_000,
        description: Some("Electric vehicles and energy storage."),
        website: Some("https://www.tesla.com"),
        has_logo: true,
    },
    Company {
        symbol: "META",
        name: "Meta Platforms, Inc.",
        exchange: "NASDAQ",
        currency: "USD",
        price: 50422,
        changes: 0,
        mkt_cap: 1_280_000_000_000,
        description: None,
        website: Some("https://about.meta.com"),
        has_logo: true,
    },
    Company {
        symbol: "BAC",
        name: "Bank of America Corporation",
        exchange: "NYSE",
        currency: "USD",
        price: 3977,
        changes: 31,
        mkt_cap: 311_000_000_000,
        description: Some("Banking, investing, and asset management."),
        website: Some("https://www.bankofamerica.com"),
        has_logo: true,
    },
    Company {
        symbol: "IBM",
        name: "International Business Machines Corporation",
        exchange: "NYSE",
        currency: "USD",
        price: 17295,
        changes: -88,
        mkt_cap: 159_000_000_000,
        description: Some("Hybrid cloud and consulting services."),
        website: None,
        has_logo: false,
    },
];

pub fn find(symbol: &str) -> Option<&'static Company> {
    COMPANIES
        .iter()
        .find(|c| c.symbol.eq_ignore_ascii_case(symbol))
}

pub fn profile(c: &Company) -> Option<CompanyProfile> {
    let symbol = Symbol::new(c.symbol).ok()?;
    Some(CompanyProfile {
        symbol,
        company_name: Some(c.name.to_string()),
        price: Some(Decimal::new(c.price, 2)),
        changes: Some(Decimal::new(c.changes, 2)),
        changes_percentage: None,
        mkt_cap: Some(Decimal::from(c.mkt_cap)),
        description: c.description.map(str::to_string),
        image: c
            .has_logo
            .then(|| format!("https://images.mock.test/logo/{}.png", c.symbol)),
        website: c.website.map(str::to_string),
        exchange: Some(c.exchange.to_string()),
    })
}

pub fn by_symbol(s: &str) -> Option<CompanyProfile> {
    find(s).and_then(profile)
}
