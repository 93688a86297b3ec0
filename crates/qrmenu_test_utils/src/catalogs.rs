//! Product builders and canned catalogs.

use serde_json::{json, Map, Value};

/// Builder for one product record in wire format.
///
/// Only the fields that were set are emitted, so optional fields are truly absent
/// rather than `null`.
#[derive(Debug, Clone)]
pub struct ProductFixture {
    fields: Map<String, Value>,
}

impl ProductFixture {
    pub fn new(name: &str, group: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("urunAdi".to_string(), json!(name));
        fields.insert("resimYolu".to_string(), json!(""));
        fields.insert("aciklama".to_string(), json!(""));
        fields.insert("fiyat".to_string(), json!(0));
        fields.insert("grupIsim".to_string(), json!(group));
        Self { fields }
    }

    /// Top group (`ustGrupIsim`).
    pub fn top(self, top: &str) -> Self {
        self.field("ustGrupIsim", json!(top))
    }

    /// Explicit rank within the group (`sira`).
    pub fn order(self, order: i64) -> Self {
        self.field("sira", json!(order))
    }

    pub fn price(self, price: f64) -> Self {
        self.field("fiyat", json!(price))
    }

    pub fn image(self, path: &str) -> Self {
        self.field("resimYolu", json!(path))
    }

    pub fn description(self, text: &str) -> Self {
        self.field("aciklama", json!(text))
    }

    pub fn id(self, id: i64) -> Self {
        self.field("id", json!(id))
    }

    /// Remove a field entirely, e.g. to simulate a product without `grupIsim`.
    pub fn without(mut self, key: &str) -> Self {
        self.fields.remove(key);
        self
    }

    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

/// One-level menu: groups only.
pub fn flat_catalog() -> Vec<Value> {
    vec![
        ProductFixture::new("Mercimek", "Çorbalar").price(85.0).build(),
        ProductFixture::new("Köfte", "Ana Yemekler").price(280.0).build(),
        ProductFixture::new("Ezogelin", "Çorbalar").price(85.0).build(),
        ProductFixture::new("Künefe", "Tatlılar").price(150.0).build(),
        ProductFixture::new("Izgara Köfte", "Ana Yemekler")
            .price(300.0)
            .build(),
    ]
}

/// Two-level menu with interleaved top groups.
pub fn hierarchical_catalog() -> Vec<Value> {
    vec![
        ProductFixture::new("Mercimek", "Çorbalar")
            .top("Yemekler")
            .price(85.0)
            .build(),
        ProductFixture::new("Çay", "Sıcak").top("İçecekler").price(20.0).build(),
        ProductFixture::new("Adana Kebap", "Izgaralar")
            .top("Yemekler")
            .price(320.0)
            .build(),
        ProductFixture::new("Ezogelin", "Çorbalar")
            .top("Yemekler")
            .price(85.0)
            .build(),
        ProductFixture::new("Kola", "Soğuk").top("İçecekler").price(45.0).build(),
        ProductFixture::new("Türk Kahvesi", "Sıcak")
            .top("İçecekler")
            .price(60.0)
            .build(),
    ]
}

/// Hierarchical menu with one product that has no top group.
pub fn orphan_catalog() -> Vec<Value> {
    let mut products = hierarchical_catalog();
    products.insert(1, ProductFixture::new("Su", "Su").price(10.0).build());
    products
}

/// Service envelope around a product list.
pub fn product_payload(products: Vec<Value>) -> Value {
    json!({ "urunler": products })
}

/// Business lookup response with a single business.
pub fn business_payload(name: &str, short_name: &str, logo: Option<&str>) -> Value {
    json!({
        "hataMesaj": null,
        "basarili": true,
        "isletmeler": [
            { "id": 18, "isletmeAdi": name, "kisaAdi": short_name, "logo": logo }
        ]
    })
}
