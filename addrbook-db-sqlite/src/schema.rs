table! {
    addresses (id) {
        id -> BigInt,
        street -> Text,
        city -> Text,
        state -> Text,
        zip_code -> Text,
        latitude -> Double,
        longitude -> Double,
    }
}
