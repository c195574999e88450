use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::materials::entities::Material;

// 资料列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/material.ts")]
pub struct MaterialListResponse {
    pub items: Vec<Material>,
    pub pagination: PaginationInfo,
}
