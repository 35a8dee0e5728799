use crate::model::Product;

/// The built-in beverage catalog used by the demo binary and the tests.
pub fn demo_products() -> Vec<Product> {
    vec![
        Product::new("BT001", "Birlanu Premium Tea 500g", "Tea", 200.0, 250.0)
            .with_description("Premium quality tea leaves with rich aroma and taste")
            .with_rating(4.5)
            .with_schemes(["Buy 10 Get 1 Free", "5% Festival Discount"])
            .with_min_order(12, "boxes"),
        Product::new("BC001", "Birlanu Instant Coffee 200g", "Coffee", 180.0, 220.0)
            .with_description("Rich and aromatic instant coffee for perfect morning brew")
            .with_rating(4.3)
            .with_schemes(["Bulk Order 15% Off", "Free Samples"])
            .with_min_order(24, "jars"),
        Product::new("BM001", "Birlanu Masala Chai 250g", "Tea", 160.0, 200.0)
            .with_description("Traditional Indian masala chai with authentic spice blend")
            .with_rating(4.7)
            .with_schemes(["Festive Combo Offer", "12+2 Free"])
            .with_min_order(15, "packets"),
        Product::new("BG001", "Birlanu Green Tea 100g", "Tea", 120.0, 150.0)
            .with_description("Healthy green tea with antioxidants for wellness")
            .with_rating(4.2)
            .with_schemes(["Health Pack Discount", "Buy 5 Get 20% Off"])
            .with_min_order(20, "boxes"),
        Product::new("BS001", "Birlanu Special Blend 300g", "Coffee", 220.0, 280.0)
            .with_description("Special coffee blend for connoisseurs")
            .with_rating(4.6)
            .with_schemes(["Premium Member 10% Off", "Early Bird Discount"])
            .with_min_order(18, "packs"),
        Product::new("BH001", "Birlanu Herbal Tea 150g", "Tea", 140.0, 180.0)
            .with_description("Natural herbal tea for health and wellness")
            .with_rating(4.4)
            .with_schemes(["Wellness Package", "Coming Soon Offer"])
            .with_min_order(12, "boxes")
            .out_of_stock(),
    ]
}
