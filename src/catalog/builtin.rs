//! The built-in catalog of food donation queries.
//!
//! Queries that depend on the current date carry an `@today` placeholder which
//! the runner substitutes with a quoted ISO date before execution. Expiry
//! dates in the backing store are canonical `YYYY-MM-DD` text, so date
//! comparisons are lexicographic and portable across backends.

use super::QueryDef;

fn def(key: u8, slug: &str, label: &str, sql: &str) -> QueryDef {
    QueryDef {
        key,
        slug: slug.to_string(),
        label: label.to_string(),
        sql: sql.trim().to_string(),
    }
}

pub(super) fn queries() -> Vec<QueryDef> {
    vec![
        def(
            1,
            "total-listings",
            "Total number of food listings",
            "SELECT COUNT(*) AS Total_Listings FROM food_listings_data",
        ),
        def(
            2,
            "active-by-city",
            "Active listings by city",
            r#"
SELECT p.City, COUNT(f.Food_ID) AS Active_Listings
FROM food_listings_data f
JOIN providers_data p ON f.Provider_ID = p.Provider_ID
WHERE f.Expiry_Date >= @today
GROUP BY p.City
ORDER BY Active_Listings DESC
"#,
        ),
        def(
            3,
            "top-food-types",
            "Top 5 most frequently listed food types",
            r#"
SELECT Food_Type, COUNT(*) AS Listing_Count
FROM food_listings_data
GROUP BY Food_Type
ORDER BY Listing_Count DESC
LIMIT 5
"#,
        ),
        def(
            4,
            "expiring-today",
            "Listings expiring today",
            r#"
SELECT COUNT(*) AS Expiring_Today
FROM food_listings_data
WHERE Expiry_Date = @today
"#,
        ),
        def(
            5,
            "provider-listing-count",
            "Provider-wise listing count",
            r#"
SELECT p.Name AS Provider_Name, COUNT(f.Food_ID) AS Listing_Count
FROM providers_data p
JOIN food_listings_data f ON p.Provider_ID = f.Provider_ID
GROUP BY p.Name
ORDER BY Listing_Count ASC
"#,
        ),
        def(
            6,
            "providers-by-city",
            "City-wise distribution of providers",
            r#"
SELECT City, COUNT(*) AS Provider_Count
FROM providers_data
GROUP BY City
"#,
        ),
        def(
            7,
            "receiver-capacity",
            "Receiver capacity by city",
            r#"
SELECT City, Type, COUNT(*) AS Receiver_Count
FROM receivers_data
GROUP BY City, Type
ORDER BY City, Receiver_Count DESC
"#,
        ),
        def(
            8,
            "listing-receiver-matches",
            "Listings matched with receivers by city",
            r#"
SELECT f.Food_ID, f.Food_Name, f.Food_Type, f.Meal_Type, f.Quantity, f.Location,
       r.Receiver_ID, r.Name AS Receiver_Name, r.Type AS Receiver_Type,
       r.City AS Receiver_City, r.Contact AS Receiver_Contact
FROM food_listings_data f
JOIN receivers_data r ON f.Location = r.City
"#,
        ),
        def(
            9,
            "quantity-by-city",
            "Total quantity of surplus food by city",
            r#"
SELECT p.City, SUM(f.Quantity) AS Total_Quantity
FROM food_listings_data f
JOIN providers_data p ON f.Provider_ID = p.Provider_ID
GROUP BY p.City
"#,
        ),
        def(
            10,
            "meal-type-distribution",
            "Meal type distribution",
            r#"
SELECT Meal_Type, COUNT(*) AS Listing_Count
FROM food_listings_data
GROUP BY Meal_Type
"#,
        ),
        def(
            11,
            "expired-listings",
            "Expired food listings",
            r#"
SELECT *
FROM food_listings_data
WHERE Expiry_Date < @today
"#,
        ),
        def(
            12,
            "listings-per-provider-type",
            "Listings per provider type",
            r#"
SELECT p.Type AS Provider_Type, COUNT(*) AS Total_Listings
FROM food_listings_data f
JOIN providers_data p ON f.Provider_ID = p.Provider_ID
GROUP BY p.Type
"#,
        ),
        def(
            13,
            "avg-quantity-by-food-type",
            "Average quantity per food type",
            r#"
SELECT Food_Type, AVG(Quantity) AS Avg_Quantity
FROM food_listings_data
GROUP BY Food_Type
"#,
        ),
        def(
            14,
            "city-coverage",
            "Providers and receivers per city",
            r#"
SELECT p.City,
       COUNT(DISTINCT p.Provider_ID) AS Total_Providers,
       COUNT(DISTINCT r.Receiver_ID) AS Total_Receivers
FROM providers_data p
LEFT JOIN receivers_data r ON p.City = r.City
GROUP BY p.City
"#,
        ),
        // Tie-break on Provider_ID keeps the top-5 ranking deterministic across
        // backends. City is selected so contact lines can render name/city/contact.
        def(
            15,
            "top-providers",
            "Top 5 providers by total quantity",
            r#"
SELECT p.Provider_ID, p.Name AS Provider_Name, p.City, p.Contact,
       SUM(f.Quantity) AS Total_Quantity
FROM providers_data p
JOIN food_listings_data f ON p.Provider_ID = f.Provider_ID
GROUP BY p.Provider_ID, p.Name, p.City, p.Contact
ORDER BY Total_Quantity DESC, p.Provider_ID ASC
LIMIT 5
"#,
        ),
    ]
}
