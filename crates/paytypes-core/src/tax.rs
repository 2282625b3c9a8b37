//! Tax ids, tax rates and product tax codes.

use crate::customer::Customer;
use crate::expandable::Expandable;
use crate::ids::{TaxCodeId, TaxIdId, TaxRateId};
use crate::object::{DeletedFlag, Metadata, Tag, Timestamp};
use crate::presence::{MaybeNull, nullable};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A customer's tax identification number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TaxId {
    pub id: TaxIdId,
    pub object: Tag<TaxId>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub country: MaybeNull<String>,
    pub created: Timestamp,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub customer: MaybeNull<Expandable<Customer>>,
    pub livemode: bool,
    #[serde(rename = "type")]
    pub type_: TaxIdType,
    pub value: String,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub verification: MaybeNull<TaxIdVerification>,
}

crate::impl_object!(TaxId, "tax_id", id);

impl TaxId {
    pub fn is_verified(&self) -> bool {
        self.verification
            .as_option()
            .is_some_and(|v| v.status == TaxIdVerificationStatus::Verified)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DeletedTaxId {
    pub id: TaxIdId,
    pub object: Tag<TaxId>,
    pub deleted: DeletedFlag,
}

crate::impl_object!(DeletedTaxId, "tax_id", deleted);

literal_enum! {
    pub enum TaxIdType {
        AeTrn = "ae_trn",
        AuAbn = "au_abn",
        AuArn = "au_arn",
        BgUic = "bg_uic",
        BrCnpj = "br_cnpj",
        BrCpf = "br_cpf",
        CaBn = "ca_bn",
        CaGstHst = "ca_gst_hst",
        CaPstBc = "ca_pst_bc",
        CaPstMb = "ca_pst_mb",
        CaPstSk = "ca_pst_sk",
        CaQst = "ca_qst",
        ChVat = "ch_vat",
        ClTin = "cl_tin",
        EgTin = "eg_tin",
        EsCif = "es_cif",
        EuOssVat = "eu_oss_vat",
        EuVat = "eu_vat",
        GbVat = "gb_vat",
        GeVat = "ge_vat",
        HkBr = "hk_br",
        HuTin = "hu_tin",
        IdNpwp = "id_npwp",
        IlVat = "il_vat",
        InGst = "in_gst",
        IsVat = "is_vat",
        JpCn = "jp_cn",
        JpRn = "jp_rn",
        JpTrn = "jp_trn",
        KePin = "ke_pin",
        KrBrn = "kr_brn",
        LiUid = "li_uid",
        MxRfc = "mx_rfc",
        MyFrp = "my_frp",
        MyItn = "my_itn",
        MySst = "my_sst",
        NoVat = "no_vat",
        NzGst = "nz_gst",
        PhTin = "ph_tin",
        RuInn = "ru_inn",
        RuKpp = "ru_kpp",
        SaVat = "sa_vat",
        SgGst = "sg_gst",
        SgUen = "sg_uen",
        SiTin = "si_tin",
        ThVat = "th_vat",
        TrTin = "tr_tin",
        TwVat = "tw_vat",
        UaVat = "ua_vat",
        Unknown = "unknown",
        UsEin = "us_ein",
        ZaVat = "za_vat",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TaxIdVerification {
    pub status: TaxIdVerificationStatus,
    #[serde(deserialize_with = "nullable")]
    pub verified_address: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub verified_name: Option<String>,
}

literal_enum! {
    pub enum TaxIdVerificationStatus {
        Pending = "pending",
        Unavailable = "unavailable",
        Unverified = "unverified",
        Verified = "verified",
    }
}

/// A tax rate applied to invoices, subscriptions and checkout sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TaxRate {
    pub id: TaxRateId,
    pub object: Tag<TaxRate>,
    pub active: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub country: MaybeNull<String>,
    pub created: Timestamp,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub description: MaybeNull<String>,
    pub display_name: String,
    pub inclusive: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub jurisdiction: MaybeNull<String>,
    pub livemode: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub metadata: MaybeNull<Metadata>,
    pub percentage: f64,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub state: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub tax_type: MaybeNull<TaxType>,
}

crate::impl_object!(TaxRate, "tax_rate", id);

impl TaxRate {
    /// Tax owed on `amount` when the rate is exclusive, in the same unit.
    pub fn exclusive_tax_on(&self, amount: i64) -> Option<i64> {
        if self.inclusive {
            return None;
        }
        Some((amount as f64 * self.percentage / 100.0).round() as i64)
    }
}

literal_enum! {
    pub enum TaxType {
        Gst = "gst",
        Hst = "hst",
        Jct = "jct",
        Pst = "pst",
        Qst = "qst",
        Rst = "rst",
        SalesTax = "sales_tax",
        Vat = "vat",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TaxCode {
    pub id: TaxCodeId,
    pub object: Tag<TaxCode>,
    pub description: String,
    pub name: String,
}

crate::impl_object!(TaxCode, "tax_code", id);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tax_id_verification() {
        let tax_id: TaxId = serde_json::from_value(json!({
            "id": "txi_123",
            "object": "tax_id",
            "country": "DE",
            "created": 1680000000,
            "customer": "cus_123",
            "livemode": false,
            "type": "eu_vat",
            "value": "DE123456789",
            "verification": {
                "status": "verified",
                "verified_address": null,
                "verified_name": "Example GmbH"
            }
        }))
        .unwrap();
        assert_eq!(tax_id.type_, TaxIdType::EuVat);
        assert!(tax_id.is_verified());
        assert_eq!(tax_id.customer.as_option().map(Expandable::id), Some("cus_123"));
    }

    #[test]
    fn test_exclusive_tax() {
        let rate: TaxRate = serde_json::from_value(json!({
            "id": "txr_1",
            "object": "tax_rate",
            "active": true,
            "country": "DE",
            "created": 1680000000,
            "description": null,
            "display_name": "VAT",
            "inclusive": false,
            "jurisdiction": null,
            "livemode": false,
            "metadata": {},
            "percentage": 19.0,
            "state": null,
            "tax_type": "vat"
        }))
        .unwrap();
        assert_eq!(rate.exclusive_tax_on(1000), Some(190));
        assert_eq!(rate.tax_type.as_option(), Some(&TaxType::Vat));
    }

    #[test]
    fn test_tax_id_type_from_str() {
        assert_eq!("us_ein".parse::<TaxIdType>().unwrap(), TaxIdType::UsEin);
        assert!("xx_vat".parse::<TaxIdType>().is_err());
    }
}
