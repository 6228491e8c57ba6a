#![allow(clippy::extra_unused_lifetimes)]

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = points_of_interest)]
pub struct NewPointOfInterest<'a> {
    pub name: &'a str,
    pub x: i64,
    pub y: i64,
}

#[derive(Queryable)]
pub struct PointOfInterest {
    pub id: i64,
    pub name: String,
    pub x: i64,
    pub y: i64,
}
