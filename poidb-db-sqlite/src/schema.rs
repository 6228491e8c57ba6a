///////////////////////////////////////////////////////////////////////
// Points of interest
///////////////////////////////////////////////////////////////////////

table! {
    points_of_interest (id) {
        id -> BigInt,
        name -> Text,
        x -> BigInt,
        y -> BigInt,
    }
}
