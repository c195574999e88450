//! 缴费记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "fee_payments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub fee_id: i64,
    pub amount: f64,
    pub method: Option<String>,
    pub reference: Option<String>,
    pub paid_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fee_records::Entity",
        from = "Column::FeeId",
        to = "super::fee_records::Column::Id"
    )]
    Fee,
}

impl Related<super::fee_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_fee_payment(self) -> crate::models::fees::entities::FeePayment {
        use crate::models::fees::entities::FeePayment;
        use chrono::{DateTime, Utc};

        FeePayment {
            id: self.id,
            fee_id: self.fee_id,
            amount: self.amount,
            method: self.method,
            reference: self.reference,
            paid_at: DateTime::<Utc>::from_timestamp(self.paid_at, 0).unwrap_or_default(),
        }
    }
}
