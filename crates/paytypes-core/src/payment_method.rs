//! Payment methods and their per-type detail shapes.
//!
//! A payment method carries a `type` literal plus exactly one sub-object
//! keyed by that literal (`card`, `sepa_debit`, ...).

use crate::charge::PaymentMethodDetailsCardPresent;
use crate::common::{Address, BillingDetails, Dob};
use crate::customer::Customer;
use crate::expandable::Expandable;
use crate::ids::PaymentMethodId;
use crate::object::{Metadata, Tag, Timestamp};
use crate::presence::{MaybeNull, nullable, present};
use crate::setup_intent::SetupAttempt;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

macro_rules! empty_details {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
            pub struct $name {}
        )+
    };
}

empty_details!(
    PaymentMethodAffirm,
    PaymentMethodAfterpayClearpay,
    PaymentMethodAlipay,
    PaymentMethodBancontact,
    PaymentMethodBlik,
    /// Card-present details live on the charge, not the payment method.
    PaymentMethodCardPresent,
    PaymentMethodCustomerBalance,
    PaymentMethodGiropay,
    PaymentMethodGrabpay,
    PaymentMethodInteracPresent,
    PaymentMethodKonbini,
    PaymentMethodOxxo,
    PaymentMethodPaynow,
    PaymentMethodPromptpay,
    PaymentMethodWechatPay,
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentMethod {
    pub id: PaymentMethodId,
    pub object: Tag<PaymentMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub acss_debit: Option<PaymentMethodAcssDebit>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub affirm: Option<PaymentMethodAffirm>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub afterpay_clearpay: Option<PaymentMethodAfterpayClearpay>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub alipay: Option<PaymentMethodAlipay>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub au_becs_debit: Option<PaymentMethodAuBecsDebit>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub bacs_debit: Option<PaymentMethodBacsDebit>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub bancontact: Option<PaymentMethodBancontact>,
    pub billing_details: BillingDetails,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub blik: Option<PaymentMethodBlik>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub boleto: Option<PaymentMethodBoleto>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub card: Option<PaymentMethodCard>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub card_present: Option<PaymentMethodCardPresent>,
    pub created: Timestamp,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub customer: MaybeNull<Expandable<Customer>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub customer_balance: Option<PaymentMethodCustomerBalance>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub eps: Option<PaymentMethodEps>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub fpx: Option<PaymentMethodFpx>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub giropay: Option<PaymentMethodGiropay>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub grabpay: Option<PaymentMethodGrabpay>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub ideal: Option<PaymentMethodIdeal>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub interac_present: Option<PaymentMethodInteracPresent>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub klarna: Option<PaymentMethodKlarna>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub konbini: Option<PaymentMethodKonbini>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub link: Option<PaymentMethodLink>,
    pub livemode: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub metadata: MaybeNull<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub oxxo: Option<PaymentMethodOxxo>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub p24: Option<PaymentMethodP24>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub paynow: Option<PaymentMethodPaynow>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub promptpay: Option<PaymentMethodPromptpay>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub radar_options: Option<RadarOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub sepa_debit: Option<PaymentMethodSepaDebit>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub sofort: Option<PaymentMethodSofort>,
    #[serde(rename = "type")]
    pub type_: PaymentMethodType,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub us_bank_account: Option<PaymentMethodUsBankAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub wechat_pay: Option<PaymentMethodWechatPay>,
}

crate::impl_object!(PaymentMethod, "payment_method", id);

impl PaymentMethod {
    /// Whether the sub-object named by `type` is present.
    pub fn has_details_for_type(&self) -> bool {
        use PaymentMethodType as T;
        match self.type_ {
            T::AcssDebit => self.acss_debit.is_some(),
            T::Affirm => self.affirm.is_some(),
            T::AfterpayClearpay => self.afterpay_clearpay.is_some(),
            T::Alipay => self.alipay.is_some(),
            T::AuBecsDebit => self.au_becs_debit.is_some(),
            T::BacsDebit => self.bacs_debit.is_some(),
            T::Bancontact => self.bancontact.is_some(),
            T::Blik => self.blik.is_some(),
            T::Boleto => self.boleto.is_some(),
            T::Card => self.card.is_some(),
            T::CardPresent => self.card_present.is_some(),
            T::CustomerBalance => self.customer_balance.is_some(),
            T::Eps => self.eps.is_some(),
            T::Fpx => self.fpx.is_some(),
            T::Giropay => self.giropay.is_some(),
            T::Grabpay => self.grabpay.is_some(),
            T::Ideal => self.ideal.is_some(),
            T::InteracPresent => self.interac_present.is_some(),
            T::Klarna => self.klarna.is_some(),
            T::Konbini => self.konbini.is_some(),
            T::Link => self.link.is_some(),
            T::Oxxo => self.oxxo.is_some(),
            T::P24 => self.p24.is_some(),
            T::Paynow => self.paynow.is_some(),
            T::Promptpay => self.promptpay.is_some(),
            T::SepaDebit => self.sepa_debit.is_some(),
            T::Sofort => self.sofort.is_some(),
            T::UsBankAccount => self.us_bank_account.is_some(),
            T::WechatPay => self.wechat_pay.is_some(),
        }
    }
}

literal_enum! {
    pub enum PaymentMethodType {
        AcssDebit = "acss_debit",
        Affirm = "affirm",
        AfterpayClearpay = "afterpay_clearpay",
        Alipay = "alipay",
        AuBecsDebit = "au_becs_debit",
        BacsDebit = "bacs_debit",
        Bancontact = "bancontact",
        Blik = "blik",
        Boleto = "boleto",
        Card = "card",
        CardPresent = "card_present",
        CustomerBalance = "customer_balance",
        Eps = "eps",
        Fpx = "fpx",
        Giropay = "giropay",
        Grabpay = "grabpay",
        Ideal = "ideal",
        InteracPresent = "interac_present",
        Klarna = "klarna",
        Konbini = "konbini",
        Link = "link",
        Oxxo = "oxxo",
        P24 = "p24",
        Paynow = "paynow",
        Promptpay = "promptpay",
        SepaDebit = "sepa_debit",
        Sofort = "sofort",
        UsBankAccount = "us_bank_account",
        WechatPay = "wechat_pay",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentMethodAcssDebit {
    #[serde(deserialize_with = "nullable")]
    pub bank_name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub fingerprint: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub institution_number: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub last4: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub transit_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentMethodAuBecsDebit {
    #[serde(deserialize_with = "nullable")]
    pub bsb_number: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub fingerprint: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub last4: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentMethodBacsDebit {
    #[serde(deserialize_with = "nullable")]
    pub fingerprint: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub last4: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub sort_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentMethodBoleto {
    pub tax_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentMethodCard {
    pub brand: String,
    #[serde(deserialize_with = "nullable")]
    pub checks: Option<PaymentMethodCardChecks>,
    #[serde(deserialize_with = "nullable")]
    pub country: Option<String>,
    pub exp_month: i64,
    pub exp_year: i64,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub fingerprint: MaybeNull<String>,
    pub funding: String,
    #[serde(deserialize_with = "nullable")]
    pub generated_from: Option<PaymentMethodCardGeneratedFrom>,
    pub last4: String,
    #[serde(deserialize_with = "nullable")]
    pub networks: Option<PaymentMethodCardNetworks>,
    #[serde(deserialize_with = "nullable")]
    pub three_d_secure_usage: Option<ThreeDSecureUsage>,
    #[serde(deserialize_with = "nullable")]
    pub wallet: Option<PaymentMethodCardWallet>,
}

/// Results of the address and CVC checks run by the card network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentMethodCardChecks {
    #[serde(deserialize_with = "nullable")]
    pub address_line1_check: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub address_postal_code_check: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub cvc_check: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentMethodCardGeneratedFrom {
    #[serde(deserialize_with = "nullable")]
    pub charge: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub payment_method_details: Option<CardGeneratedFromDetails>,
    #[serde(deserialize_with = "nullable")]
    pub setup_attempt: Option<Expandable<SetupAttempt>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CardGeneratedFromDetails {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub card_present: Option<PaymentMethodDetailsCardPresent>,
    #[serde(rename = "type")]
    pub type_: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentMethodCardNetworks {
    pub available: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub preferred: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ThreeDSecureUsage {
    pub supported: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentMethodCardWallet {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub amex_express_checkout: Option<WalletEmpty>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub apple_pay: Option<WalletEmpty>,
    #[serde(deserialize_with = "nullable")]
    pub dynamic_last4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub google_pay: Option<WalletEmpty>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub masterpass: Option<WalletWithAddresses>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub samsung_pay: Option<WalletEmpty>,
    #[serde(rename = "type")]
    pub type_: WalletType,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub visa_checkout: Option<WalletWithAddresses>,
}

empty_details!(WalletEmpty);

/// Masterpass and Visa Checkout report the addresses the wallet supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WalletWithAddresses {
    #[serde(deserialize_with = "nullable")]
    pub billing_address: Option<Address>,
    #[serde(deserialize_with = "nullable")]
    pub email: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub shipping_address: Option<Address>,
}

literal_enum! {
    pub enum WalletType {
        AmexExpressCheckout = "amex_express_checkout",
        ApplePay = "apple_pay",
        GooglePay = "google_pay",
        Masterpass = "masterpass",
        SamsungPay = "samsung_pay",
        VisaCheckout = "visa_checkout",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentMethodEps {
    #[serde(deserialize_with = "nullable")]
    pub bank: Option<EpsBank>,
}

literal_enum! {
    pub enum EpsBank {
        ArzteUndApothekerBank = "arzte_und_apotheker_bank",
        AustrianAnadiBankAg = "austrian_anadi_bank_ag",
        BankAustria = "bank_austria",
        BankhausCarlSpangler = "bankhaus_carl_spangler",
        BankhausSchelhammerUndSchatteraAg = "bankhaus_schelhammer_und_schattera_ag",
        BawagPskAg = "bawag_psk_ag",
        BksBankAg = "bks_bank_ag",
        BrullKallmusBankAg = "brull_kallmus_bank_ag",
        BtvVierLanderBank = "btv_vier_lander_bank",
        CapitalBankGraweGruppeAg = "capital_bank_grawe_gruppe_ag",
        DeutscheBankAg = "deutsche_bank_ag",
        Dolomitenbank = "dolomitenbank",
        EasybankAg = "easybank_ag",
        ErsteBankUndSparkassen = "erste_bank_und_sparkassen",
        HypoAlpeadriabankInternationalAg = "hypo_alpeadriabank_international_ag",
        HypoBankBurgenlandAktiengesellschaft = "hypo_bank_burgenland_aktiengesellschaft",
        HypoNoeLbFurNiederosterreichUWien = "hypo_noe_lb_fur_niederosterreich_u_wien",
        HypoOberosterreichSalzburgSteiermark = "hypo_oberosterreich_salzburg_steiermark",
        HypoTirolBankAg = "hypo_tirol_bank_ag",
        HypoVorarlbergBankAg = "hypo_vorarlberg_bank_ag",
        MarchfelderBank = "marchfelder_bank",
        OberbankAg = "oberbank_ag",
        RaiffeisenBankengruppeOsterreich = "raiffeisen_bankengruppe_osterreich",
        SchoellerbankAg = "schoellerbank_ag",
        SpardaBankWien = "sparda_bank_wien",
        VolksbankGruppe = "volksbank_gruppe",
        VolkskreditbankAg = "volkskreditbank_ag",
        VrBankBraunau = "vr_bank_braunau",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentMethodFpx {
    pub bank: FpxBank,
}

literal_enum! {
    pub enum FpxBank {
        AffinBank = "affin_bank",
        Agrobank = "agrobank",
        AllianceBank = "alliance_bank",
        Ambank = "ambank",
        BankIslam = "bank_islam",
        BankMuamalat = "bank_muamalat",
        BankRakyat = "bank_rakyat",
        Bsn = "bsn",
        Cimb = "cimb",
        DeutscheBank = "deutsche_bank",
        HongLeongBank = "hong_leong_bank",
        Hsbc = "hsbc",
        Kfh = "kfh",
        Maybank2e = "maybank2e",
        Maybank2u = "maybank2u",
        Ocbc = "ocbc",
        PbEnterprise = "pb_enterprise",
        PublicBank = "public_bank",
        Rhb = "rhb",
        StandardChartered = "standard_chartered",
        Uob = "uob",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentMethodIdeal {
    #[serde(deserialize_with = "nullable")]
    pub bank: Option<IdealBank>,
    #[serde(deserialize_with = "nullable")]
    pub bic: Option<IdealBic>,
}

literal_enum! {
    pub enum IdealBank {
        AbnAmro = "abn_amro",
        AsnBank = "asn_bank",
        Bunq = "bunq",
        Handelsbanken = "handelsbanken",
        Ing = "ing",
        Knab = "knab",
        Moneyou = "moneyou",
        Rabobank = "rabobank",
        Regiobank = "regiobank",
        Revolut = "revolut",
        SnsBank = "sns_bank",
        TriodosBank = "triodos_bank",
        VanLanschot = "van_lanschot",
    }
}

literal_enum! {
    pub enum IdealBic {
        Abnanl2a = "ABNANL2A",
        Asnbnl21 = "ASNBNL21",
        Bunqnl2a = "BUNQNL2A",
        Fvlbnl22 = "FVLBNL22",
        Handnl2a = "HANDNL2A",
        Ingbnl2a = "INGBNL2A",
        Knabnl2h = "KNABNL2H",
        Moyonl21 = "MOYONL21",
        Rabonl2u = "RABONL2U",
        Rbrbnl21 = "RBRBNL21",
        Revolt21 = "REVOLT21",
        Snsbnl2a = "SNSBNL2A",
        Trionl2u = "TRIONL2U",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentMethodKlarna {
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub dob: MaybeNull<Dob>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentMethodLink {
    #[serde(deserialize_with = "nullable")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub persistent_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentMethodP24 {
    #[serde(deserialize_with = "nullable")]
    pub bank: Option<P24Bank>,
}

literal_enum! {
    pub enum P24Bank {
        AliorBank = "alior_bank",
        BankMillennium = "bank_millennium",
        BankNowyBfgSa = "bank_nowy_bfg_sa",
        BankPekaoSa = "bank_pekao_sa",
        BankiSpbdzielcze = "banki_spbdzielcze",
        Blik = "blik",
        BnpParibas = "bnp_paribas",
        Boz = "boz",
        CitiHandlowy = "citi_handlowy",
        CreditAgricole = "credit_agricole",
        Envelobank = "envelobank",
        EtransferPocztowy24 = "etransfer_pocztowy24",
        GetinBank = "getin_bank",
        Ideabank = "ideabank",
        Ing = "ing",
        Inteligo = "inteligo",
        MbankMbank = "mbank_mbank",
        NestPrzelew = "nest_przelew",
        NoblePay = "noble_pay",
        PbacZIpko = "pbac_z_ipko",
        PlusBank = "plus_bank",
        SantanderPrzelew24 = "santander_przelew24",
        TmobileUsbugiBankowe = "tmobile_usbugi_bankowe",
        ToyotaBank = "toyota_bank",
        VolkswagenBank = "volkswagen_bank",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RadarOptions {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub session: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentMethodSepaDebit {
    #[serde(deserialize_with = "nullable")]
    pub bank_code: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub branch_code: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub country: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub fingerprint: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub generated_from: Option<SepaDebitGeneratedFrom>,
    #[serde(deserialize_with = "nullable")]
    pub last4: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SepaDebitGeneratedFrom {
    #[serde(deserialize_with = "nullable")]
    pub charge: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub setup_attempt: Option<Expandable<SetupAttempt>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentMethodSofort {
    #[serde(deserialize_with = "nullable")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentMethodUsBankAccount {
    #[serde(deserialize_with = "nullable")]
    pub account_holder_type: Option<AccountHolderType>,
    #[serde(deserialize_with = "nullable")]
    pub account_type: Option<UsBankAccountType>,
    #[serde(deserialize_with = "nullable")]
    pub bank_name: Option<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub financial_connections_account: MaybeNull<String>,
    #[serde(deserialize_with = "nullable")]
    pub fingerprint: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub last4: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub networks: Option<UsBankAccountNetworks>,
    #[serde(deserialize_with = "nullable")]
    pub routing_number: Option<String>,
}

literal_enum! {
    pub enum AccountHolderType {
        Company = "company",
        Individual = "individual",
    }
}

literal_enum! {
    pub enum UsBankAccountType {
        Checking = "checking",
        Savings = "savings",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UsBankAccountNetworks {
    #[serde(deserialize_with = "nullable")]
    pub preferred: Option<String>,
    pub supported: Vec<UsBankNetwork>,
}

literal_enum! {
    pub enum UsBankNetwork {
        Ach = "ach",
        UsDomesticWire = "us_domestic_wire",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn card_payment_method() -> serde_json::Value {
        json!({
            "id": "pm_1",
            "object": "payment_method",
            "billing_details": {
                "address": null, "email": null, "name": "Jenny Rosen", "phone": null
            },
            "card": {
                "brand": "visa",
                "checks": {
                    "address_line1_check": null,
                    "address_postal_code_check": null,
                    "cvc_check": "pass"
                },
                "country": "US",
                "exp_month": 8,
                "exp_year": 2030,
                "fingerprint": "Xt5EWLLDS7FJjR1c",
                "funding": "credit",
                "generated_from": null,
                "last4": "4242",
                "networks": {"available": ["visa"], "preferred": null},
                "three_d_secure_usage": {"supported": true},
                "wallet": null
            },
            "created": 1700000000,
            "customer": null,
            "livemode": false,
            "metadata": {},
            "type": "card"
        })
    }

    #[test]
    fn test_card_payment_method() {
        let pm: PaymentMethod = serde_json::from_value(card_payment_method()).unwrap();
        assert_eq!(pm.type_, PaymentMethodType::Card);
        assert!(pm.has_details_for_type());
        assert_eq!(pm.card.as_ref().unwrap().last4, "4242");
        assert_eq!(serde_json::to_value(&pm).unwrap(), card_payment_method());
    }

    #[test]
    fn test_details_missing_for_type() {
        let mut payload = card_payment_method();
        payload["type"] = json!("sepa_debit");
        let pm: PaymentMethod = serde_json::from_value(payload).unwrap();
        assert!(!pm.has_details_for_type());
    }

    #[test]
    fn test_optional_sub_object_rejects_null() {
        let mut payload = card_payment_method();
        payload["card"] = json!(null);
        assert!(serde_json::from_value::<PaymentMethod>(payload).is_err());
    }

    #[rstest]
    fn test_every_type_literal_parses(#[values("acss_debit", "card", "us_bank_account", "wechat_pay")] literal: &str) {
        let parsed: PaymentMethodType = literal.parse().unwrap();
        assert_eq!(parsed.as_str(), literal);
    }

    #[test]
    fn test_type_set_is_closed() {
        assert_eq!(PaymentMethodType::ALL.len(), 29);
        assert!("paypal".parse::<PaymentMethodType>().is_err());
    }
}
