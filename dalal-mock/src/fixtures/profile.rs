use dalal_core::CompanyProfile;

// Reliance's summary is intentionally longer than the 500-character display
// cut so snapshot truncation is exercised end to end.
const RELIANCE_SUMMARY: &str = "Reliance Industries Limited engages in hydrocarbon exploration and \
production, oil and chemicals, textiles, retail, digital services, and financial services \
businesses across India and internationally. The company operates one of the largest integrated \
refining and petrochemicals complexes in the world and produces a range of polymers, polyesters, \
fibre intermediates, and aromatics. Through its retail arm it runs grocery, consumer electronics, \
fashion, and lifestyle stores along with e-commerce channels, and through its digital services arm \
it provides wireless broadband, fibre connectivity, and a portfolio of consumer platforms. The \
company also develops and operates renewable energy capacity, including solar module and battery \
manufacturing.";

pub fn by_ticker(t: &str) -> Option<CompanyProfile> {
    match t {
        "INFY.NS" | "INFY.BO" => Some(CompanyProfile {
            name: Some("Infosys Limited".into()),
            sector: Some("Technology".into()),
            industry: Some("Information Technology Services".into()),
            website: Some("https://www.infosys.com".into()),
            summary: Some(
                "Infosys Limited provides consulting, technology, outsourcing, and \
                 next-generation digital services in India and internationally."
                    .into(),
            ),
        }),
        "TCS.NS" => Some(CompanyProfile {
            name: Some("Tata Consultancy Services Limited".into()),
            sector: Some("Technology".into()),
            industry: Some("Information Technology Services".into()),
            website: Some("https://www.tcs.com".into()),
            // No summary reported; the dashboard shows "Not available".
            summary: None,
        }),
        "RELIANCE.NS" | "RELIANCE.BO" => Some(CompanyProfile {
            name: Some("Reliance Industries Limited".into()),
            sector: Some("Energy".into()),
            industry: Some("Oil & Gas Refining & Marketing".into()),
            website: Some("https://www.ril.com".into()),
            summary: Some(RELIANCE_SUMMARY.into()),
        }),
        "NEWIPO.NS" => Some(CompanyProfile {
            name: Some("Newly Listed Co".into()),
            ..CompanyProfile::default()
        }),
        _ => None,
    }
}
