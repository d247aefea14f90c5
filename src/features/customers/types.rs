//! Types for customer registration and profiles.

use crate::app_lib::{AppError, decimal};
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

/// Identity document attached to a registration.
#[derive(Clone, Debug, Default)]
pub struct IdDocument {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Registration fields as entered by the customer. Validation is owned by the
/// backend; the client only encodes the form.
#[derive(Clone, Debug, Default)]
pub struct RegistrationForm {
    pub first_name: String,
    pub middle_name: String,
    pub surname: String,
    pub gender: String,
    pub date_of_birth: String,
    pub nationality: String,
    pub address: String,
    pub phone_number: String,
    pub email: String,
    pub father_name: String,
    pub mother_name: String,
    pub profession: String,
    pub annual_income: String,
    pub password: String,
    pub confirm_password: String,
    pub id_document: Option<IdDocument>,
}

impl RegistrationForm {
    /// Text fields in submission order.
    pub fn text_fields(&self) -> [(&'static str, &str); 15] {
        [
            ("first_name", self.first_name.as_str()),
            ("middle_name", self.middle_name.as_str()),
            ("surname", self.surname.as_str()),
            ("gender", self.gender.as_str()),
            ("date_of_birth", self.date_of_birth.as_str()),
            ("nationality", self.nationality.as_str()),
            ("address", self.address.as_str()),
            ("phone_number", self.phone_number.as_str()),
            ("email", self.email.as_str()),
            ("father_name", self.father_name.as_str()),
            ("mother_name", self.mother_name.as_str()),
            ("profession", self.profession.as_str()),
            ("annual_income", self.annual_income.as_str()),
            ("password", self.password.as_str()),
            ("confirm_password", self.confirm_password.as_str()),
        ]
    }

    /// Mutable access to a text field by its submitted name.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        let field = match name {
            "first_name" => &mut self.first_name,
            "middle_name" => &mut self.middle_name,
            "surname" => &mut self.surname,
            "gender" => &mut self.gender,
            "date_of_birth" => &mut self.date_of_birth,
            "nationality" => &mut self.nationality,
            "address" => &mut self.address,
            "phone_number" => &mut self.phone_number,
            "email" => &mut self.email,
            "father_name" => &mut self.father_name,
            "mother_name" => &mut self.mother_name,
            "profession" => &mut self.profession,
            "annual_income" => &mut self.annual_income,
            "password" => &mut self.password,
            "confirm_password" => &mut self.confirm_password,
            _ => return None,
        };
        Some(field)
    }

    /// Encodes the form as multipart data with the document under `id_document`.
    ///
    /// # Errors
    /// Returns `AppError::Serialization` if the document MIME type is invalid.
    pub fn to_multipart(&self) -> Result<Form, AppError> {
        let mut form = Form::new();
        for (name, value) in self.text_fields() {
            form = form.text(name, value.to_string());
        }

        if let Some(document) = &self.id_document {
            let mut part =
                Part::bytes(document.bytes.clone()).file_name(document.file_name.clone());
            if !document.mime_type.trim().is_empty() {
                part = part.mime_str(document.mime_type.trim()).map_err(|err| {
                    AppError::Serialization(format!("Invalid document type: {err}"))
                })?;
            }
            form = form.part("id_document", part);
        }

        Ok(form)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl CustomerStatus {
    pub fn label(self) -> &'static str {
        match self {
            CustomerStatus::Pending => "Pending Approval",
            CustomerStatus::Approved => "Approved",
            CustomerStatus::Rejected => "Rejected",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CustomerProfile {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    pub surname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub profession: String,
    #[serde(default, deserialize_with = "decimal::deserialize_option")]
    pub annual_income: Option<f64>,
    #[serde(default)]
    pub status: CustomerStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl CustomerProfile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.surname)
    }
}
