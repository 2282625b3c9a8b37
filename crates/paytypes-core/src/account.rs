//! Connected accounts and the people attached to them.

use crate::bank_account::BankAccount;
use crate::card::Card;
use crate::common::{Address, Dob, JapanAddress};
use crate::expandable::Expandable;
use crate::file::File;
use crate::ids::{AccountId, PersonId};
use crate::list::List;
use crate::object::{DeletedFlag, Metadata, Tag, Timestamp};
use crate::presence::{MaybeNull, nullable, present};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Account {
    pub id: AccountId,
    pub object: Tag<Account>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub business_profile: MaybeNull<AccountBusinessProfile>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub business_type: MaybeNull<BusinessType>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub capabilities: Option<AccountCapabilities>,
    pub charges_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub company: Option<LegalEntityCompany>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub controller: Option<AccountController>,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub created: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub default_currency: Option<String>,
    pub details_submitted: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub email: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub external_accounts: Option<List<ExternalAccount>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub future_requirements: Option<AccountRequirements>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub individual: Option<Person>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub metadata: Option<Metadata>,
    pub payouts_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub requirements: Option<AccountRequirements>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub settings: MaybeNull<AccountSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub tos_acceptance: Option<AccountTosAcceptance>,
    #[serde(rename = "type")]
    pub type_: AccountType,
}

crate::impl_object!(Account, "account", id);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DeletedAccount {
    pub id: AccountId,
    pub object: Tag<Account>,
    pub deleted: DeletedFlag,
}

crate::impl_object!(DeletedAccount, "account", deleted);

crate::object_union! {
    /// An account reference whose expansion may be a deleted stub.
    pub enum AccountOrDeleted {
        Account(Account),
        Deleted(DeletedAccount),
    }
}

crate::object_union! {
    /// Payout destination attached to an account.
    pub enum ExternalAccount {
        BankAccount(BankAccount),
        Card(Card),
    }
}

literal_enum! {
    pub enum AccountType {
        Custom = "custom",
        Express = "express",
        Standard = "standard",
    }
}

literal_enum! {
    pub enum BusinessType {
        Company = "company",
        GovernmentEntity = "government_entity",
        Individual = "individual",
        NonProfit = "non_profit",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AccountBusinessProfile {
    #[serde(deserialize_with = "nullable")]
    pub mcc: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub product_description: MaybeNull<String>,
    #[serde(deserialize_with = "nullable")]
    pub support_address: Option<Address>,
    #[serde(deserialize_with = "nullable")]
    pub support_email: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub support_phone: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub support_url: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub url: Option<String>,
}

literal_enum! {
    pub enum CapabilityStatus {
        Active = "active",
        Inactive = "inactive",
        Pending = "pending",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct AccountCapabilities {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub acss_debit_payments: Option<CapabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub affirm_payments: Option<CapabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub afterpay_clearpay_payments: Option<CapabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub au_becs_debit_payments: Option<CapabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub bacs_debit_payments: Option<CapabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub bancontact_payments: Option<CapabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub bank_transfer_payments: Option<CapabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub blik_payments: Option<CapabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub boleto_payments: Option<CapabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub card_issuing: Option<CapabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub card_payments: Option<CapabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub cartes_bancaires_payments: Option<CapabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub eps_payments: Option<CapabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub fpx_payments: Option<CapabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub giropay_payments: Option<CapabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub grabpay_payments: Option<CapabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub ideal_payments: Option<CapabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub jcb_payments: Option<CapabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub klarna_payments: Option<CapabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub konbini_payments: Option<CapabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub legacy_payments: Option<CapabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub link_payments: Option<CapabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub oxxo_payments: Option<CapabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub p24_payments: Option<CapabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub paynow_payments: Option<CapabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub promptpay_payments: Option<CapabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub sepa_debit_payments: Option<CapabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub sofort_payments: Option<CapabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub tax_reporting_us_1099_k: Option<CapabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub tax_reporting_us_1099_misc: Option<CapabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub transfers: Option<CapabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub treasury: Option<CapabilityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub us_bank_account_ach_payments: Option<CapabilityStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LegalEntityCompany {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub address_kana: MaybeNull<JapanAddress>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub address_kanji: MaybeNull<JapanAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub directors_provided: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub executives_provided: Option<bool>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub name: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub name_kana: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub name_kanji: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub owners_provided: Option<bool>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub ownership_declaration: MaybeNull<OwnershipDeclaration>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub phone: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub structure: Option<CompanyStructure>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub tax_id_provided: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub tax_id_registrar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub vat_id_provided: Option<bool>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub verification: MaybeNull<LegalEntityCompanyVerification>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OwnershipDeclaration {
    #[serde(deserialize_with = "nullable")]
    pub date: Option<Timestamp>,
    #[serde(deserialize_with = "nullable")]
    pub ip: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub user_agent: Option<String>,
}

literal_enum! {
    pub enum CompanyStructure {
        FreeZoneEstablishment = "free_zone_establishment",
        FreeZoneLlc = "free_zone_llc",
        GovernmentInstrumentality = "government_instrumentality",
        GovernmentalUnit = "governmental_unit",
        IncorporatedNonProfit = "incorporated_non_profit",
        LimitedLiabilityPartnership = "limited_liability_partnership",
        Llc = "llc",
        MultiMemberLlc = "multi_member_llc",
        PrivateCompany = "private_company",
        PrivateCorporation = "private_corporation",
        PrivatePartnership = "private_partnership",
        PublicCompany = "public_company",
        PublicCorporation = "public_corporation",
        PublicPartnership = "public_partnership",
        SingleMemberLlc = "single_member_llc",
        SoleEstablishment = "sole_establishment",
        SoleProprietorship = "sole_proprietorship",
        TaxExemptGovernmentInstrumentality = "tax_exempt_government_instrumentality",
        UnincorporatedAssociation = "unincorporated_association",
        UnincorporatedNonProfit = "unincorporated_non_profit",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LegalEntityCompanyVerification {
    pub document: VerificationDocument,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VerificationDocument {
    #[serde(deserialize_with = "nullable")]
    pub back: Option<Expandable<File>>,
    #[serde(deserialize_with = "nullable")]
    pub details: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub details_code: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub front: Option<Expandable<File>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AccountController {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub is_controller: Option<bool>,
    #[serde(rename = "type")]
    pub type_: ControllerType,
}

literal_enum! {
    pub enum ControllerType {
        Account = "account",
        Application = "application",
    }
}

/// Current and future verification requirements share one shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AccountRequirements {
    #[serde(deserialize_with = "nullable")]
    pub alternatives: Option<Vec<AccountRequirementsAlternative>>,
    #[serde(deserialize_with = "nullable")]
    pub current_deadline: Option<Timestamp>,
    #[serde(deserialize_with = "nullable")]
    pub currently_due: Option<Vec<String>>,
    #[serde(deserialize_with = "nullable")]
    pub disabled_reason: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub errors: Option<Vec<AccountRequirementsError>>,
    #[serde(deserialize_with = "nullable")]
    pub eventually_due: Option<Vec<String>>,
    #[serde(deserialize_with = "nullable")]
    pub past_due: Option<Vec<String>>,
    #[serde(deserialize_with = "nullable")]
    pub pending_verification: Option<Vec<String>>,
}

impl AccountRequirements {
    /// Whether anything is currently due or past due.
    pub fn has_outstanding(&self) -> bool {
        let non_empty = |fields: &Option<Vec<String>>| fields.as_ref().is_some_and(|f| !f.is_empty());
        non_empty(&self.currently_due) || non_empty(&self.past_due)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AccountRequirementsAlternative {
    pub alternative_fields_due: Vec<String>,
    pub original_fields_due: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AccountRequirementsError {
    pub code: RequirementsErrorCode,
    pub reason: String,
    pub requirement: String,
}

literal_enum! {
    pub enum RequirementsErrorCode {
        InvalidAddressCityStatePostalCode = "invalid_address_city_state_postal_code",
        InvalidStreetAddress = "invalid_street_address",
        InvalidValueOther = "invalid_value_other",
        VerificationDocumentAddressMismatch = "verification_document_address_mismatch",
        VerificationDocumentAddressMissing = "verification_document_address_missing",
        VerificationDocumentCorrupt = "verification_document_corrupt",
        VerificationDocumentCountryNotSupported = "verification_document_country_not_supported",
        VerificationDocumentDobMismatch = "verification_document_dob_mismatch",
        VerificationDocumentDuplicateType = "verification_document_duplicate_type",
        VerificationDocumentExpired = "verification_document_expired",
        VerificationDocumentFailedCopy = "verification_document_failed_copy",
        VerificationDocumentFailedGreyscale = "verification_document_failed_greyscale",
        VerificationDocumentFailedOther = "verification_document_failed_other",
        VerificationDocumentFailedTestMode = "verification_document_failed_test_mode",
        VerificationDocumentFraudulent = "verification_document_fraudulent",
        VerificationDocumentIdNumberMismatch = "verification_document_id_number_mismatch",
        VerificationDocumentIdNumberMissing = "verification_document_id_number_missing",
        VerificationDocumentIncomplete = "verification_document_incomplete",
        VerificationDocumentInvalid = "verification_document_invalid",
        VerificationDocumentIssueOrExpiryDateMissing = "verification_document_issue_or_expiry_date_missing",
        VerificationDocumentManipulated = "verification_document_manipulated",
        VerificationDocumentMissingBack = "verification_document_missing_back",
        VerificationDocumentMissingFront = "verification_document_missing_front",
        VerificationDocumentNameMismatch = "verification_document_name_mismatch",
        VerificationDocumentNameMissing = "verification_document_name_missing",
        VerificationDocumentNationalityMismatch = "verification_document_nationality_mismatch",
        VerificationDocumentNotReadable = "verification_document_not_readable",
        VerificationDocumentNotSigned = "verification_document_not_signed",
        VerificationDocumentNotUploaded = "verification_document_not_uploaded",
        VerificationDocumentPhotoMismatch = "verification_document_photo_mismatch",
        VerificationDocumentTooLarge = "verification_document_too_large",
        VerificationDocumentTypeNotSupported = "verification_document_type_not_supported",
        VerificationFailedAddressMatch = "verification_failed_address_match",
        VerificationFailedBusinessIecNumber = "verification_failed_business_iec_number",
        VerificationFailedDocumentMatch = "verification_failed_document_match",
        VerificationFailedIdNumberMatch = "verification_failed_id_number_match",
        VerificationFailedKeyedIdentity = "verification_failed_keyed_identity",
        VerificationFailedKeyedMatch = "verification_failed_keyed_match",
        VerificationFailedNameMatch = "verification_failed_name_match",
        VerificationFailedOther = "verification_failed_other",
        VerificationFailedTaxIdMatch = "verification_failed_tax_id_match",
        VerificationFailedTaxIdNotIssued = "verification_failed_tax_id_not_issued",
        VerificationMissingExecutives = "verification_missing_executives",
        VerificationMissingOwners = "verification_missing_owners",
        VerificationRequiresAdditionalMemorandumOfAssociations = "verification_requires_additional_memorandum_of_associations",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AccountSettings {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub bacs_debit_payments: Option<BacsDebitPaymentsSettings>,
    pub branding: BrandingSettings,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub card_issuing: Option<CardIssuingSettings>,
    pub card_payments: CardPaymentsSettings,
    pub dashboard: DashboardSettings,
    pub payments: PaymentsSettings,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub payouts: Option<PayoutSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub sepa_debit_payments: Option<SepaDebitPaymentsSettings>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BacsDebitPaymentsSettings {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BrandingSettings {
    #[serde(deserialize_with = "nullable")]
    pub icon: Option<Expandable<File>>,
    #[serde(deserialize_with = "nullable")]
    pub logo: Option<Expandable<File>>,
    #[serde(deserialize_with = "nullable")]
    pub primary_color: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub secondary_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CardIssuingSettings {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub tos_acceptance: Option<CardIssuingTosAcceptance>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CardIssuingTosAcceptance {
    #[serde(deserialize_with = "nullable")]
    pub date: Option<Timestamp>,
    #[serde(deserialize_with = "nullable")]
    pub ip: Option<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub user_agent: MaybeNull<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CardPaymentsSettings {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub decline_on: Option<DeclineChargeOn>,
    #[serde(deserialize_with = "nullable")]
    pub statement_descriptor_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub statement_descriptor_prefix_kana: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub statement_descriptor_prefix_kanji: MaybeNull<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DeclineChargeOn {
    pub avs_failure: bool,
    pub cvc_failure: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DashboardSettings {
    #[serde(deserialize_with = "nullable")]
    pub display_name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentsSettings {
    #[serde(deserialize_with = "nullable")]
    pub statement_descriptor: Option<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub statement_descriptor_kana: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub statement_descriptor_kanji: MaybeNull<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PayoutSettings {
    pub debit_negative_balances: bool,
    pub schedule: PayoutSchedule,
    #[serde(deserialize_with = "nullable")]
    pub statement_descriptor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PayoutSchedule {
    pub delay_days: i64,
    pub interval: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub monthly_anchor: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub weekly_anchor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SepaDebitPaymentsSettings {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub creditor_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AccountTosAcceptance {
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub date: MaybeNull<Timestamp>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub ip: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub service_agreement: Option<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub user_agent: MaybeNull<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Person {
    pub id: PersonId,
    pub object: Tag<Person>,
    pub account: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub address_kana: MaybeNull<JapanAddress>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub address_kanji: MaybeNull<JapanAddress>,
    pub created: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub dob: Option<Dob>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub email: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub first_name: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub first_name_kana: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub first_name_kanji: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub full_name_aliases: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub future_requirements: MaybeNull<PersonRequirements>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub gender: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub id_number_provided: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub id_number_secondary_provided: Option<bool>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub last_name: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub last_name_kana: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub last_name_kanji: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub maiden_name: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub nationality: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub phone: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub political_exposure: Option<PoliticalExposure>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub registered_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub relationship: Option<PersonRelationship>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub requirements: MaybeNull<PersonRequirements>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub ssn_last_4_provided: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub verification: Option<LegalEntityVerification>,
}

crate::impl_object!(Person, "person", id);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DeletedPerson {
    pub id: PersonId,
    pub object: Tag<Person>,
    pub deleted: DeletedFlag,
}

crate::impl_object!(DeletedPerson, "person", deleted);

literal_enum! {
    pub enum PoliticalExposure {
        Existing = "existing",
        None = "none",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PersonRelationship {
    #[serde(deserialize_with = "nullable")]
    pub director: Option<bool>,
    #[serde(deserialize_with = "nullable")]
    pub executive: Option<bool>,
    #[serde(deserialize_with = "nullable")]
    pub owner: Option<bool>,
    #[serde(deserialize_with = "nullable")]
    pub percent_ownership: Option<f64>,
    #[serde(deserialize_with = "nullable")]
    pub representative: Option<bool>,
    #[serde(deserialize_with = "nullable")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PersonRequirements {
    #[serde(deserialize_with = "nullable")]
    pub alternatives: Option<Vec<AccountRequirementsAlternative>>,
    pub currently_due: Vec<String>,
    pub errors: Vec<AccountRequirementsError>,
    pub eventually_due: Vec<String>,
    pub past_due: Vec<String>,
    pub pending_verification: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LegalEntityVerification {
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub additional_document: MaybeNull<VerificationDocument>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub details: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub details_code: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub document: Option<VerificationDocument>,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_account() -> serde_json::Value {
        json!({
            "id": "acct_1",
            "object": "account",
            "charges_enabled": true,
            "country": "US",
            "details_submitted": true,
            "email": null,
            "payouts_enabled": false,
            "type": "express"
        })
    }

    #[test]
    fn test_minimal_account() {
        let account: Account = serde_json::from_value(minimal_account()).unwrap();
        assert_eq!(account.type_, AccountType::Express);
        assert!(account.settings.is_absent());
        assert_eq!(serde_json::to_value(&account).unwrap(), minimal_account());
    }

    #[test]
    fn test_account_or_deleted() {
        let deleted: AccountOrDeleted =
            serde_json::from_value(json!({"id": "acct_1", "object": "account", "deleted": true}))
                .unwrap();
        assert!(deleted.is_deleted());

        let live: AccountOrDeleted = serde_json::from_value(minimal_account()).unwrap();
        assert!(matches!(live, AccountOrDeleted::Account(_)));
    }

    #[test]
    fn test_requirements_outstanding() {
        let requirements: AccountRequirements = serde_json::from_value(json!({
            "alternatives": [],
            "current_deadline": null,
            "currently_due": ["external_account"],
            "disabled_reason": null,
            "errors": [{
                "code": "verification_document_expired",
                "reason": "expired",
                "requirement": "individual.verification.document"
            }],
            "eventually_due": [],
            "past_due": null,
            "pending_verification": []
        }))
        .unwrap();
        assert!(requirements.has_outstanding());
        let errors = requirements.errors.unwrap();
        assert_eq!(errors[0].code, RequirementsErrorCode::VerificationDocumentExpired);
    }
}
