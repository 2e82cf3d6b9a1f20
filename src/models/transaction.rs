use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Transaction — One recorded sale as returned by the sales API
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "Produto", default, deserialize_with = "lenient::deserialize")]
    pub product: Option<String>,
    #[serde(rename = "Categoria do Produto", default)]
    pub category: String,
    #[serde(rename = "Preço")]
    pub price: f64,
    #[serde(rename = "Frete", default, deserialize_with = "lenient::deserialize")]
    pub freight: Option<f64>,
    #[serde(rename = "Data da Compra", with = "purchase_date")]
    pub purchase_date: NaiveDate,
    #[serde(rename = "Vendedor")]
    pub seller: String,
    #[serde(rename = "Local da compra")]
    pub state: String,
    #[serde(rename = "Avaliação da compra", default, deserialize_with = "lenient::deserialize")]
    pub rating: Option<i64>,
    #[serde(rename = "Tipo de pagamento", default, deserialize_with = "lenient::deserialize")]
    pub payment_type: Option<String>,
    #[serde(rename = "Quantidade de parcelas", default, deserialize_with = "lenient::deserialize")]
    pub installments: Option<i64>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl Transaction {
    /// Build a transaction from its required fields; incidental fields are empty.
    pub fn new(
        state: impl Into<String>,
        seller: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        purchase_date: NaiveDate,
    ) -> Self {
        Self {
            product: None,
            category: category.into(),
            price,
            freight: None,
            purchase_date,
            seller: seller.into(),
            state: state.into(),
            rating: None,
            payment_type: None,
            installments: None,
            lat: None,
            lon: None,
        }
    }

    /// Attach buyer coordinates.
    pub fn with_location(mut self, lat: f64, lon: f64) -> Self {
        self.lat = Some(lat);
        self.lon = Some(lon);
        self
    }
}

/// Incidental columns: a value of the wrong type reads as `None` instead of
/// failing the whole response.
pub mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(raw.and_then(|v| serde_json::from_value(v).ok()))
    }
}

/// `DD/MM/YYYY` purchase dates.
pub mod purchase_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%d/%m/%Y";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(raw.trim(), FORMAT)
            .map_err(|e| de::Error::custom(format!("invalid purchase date '{}': {}", raw, e)))
    }
}
