//! Navigation-related state types.
//!
//! This module contains the views of the application and the sections listed
//! on the main screen.

/// Specifying the different views.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum View {
    Login,
    Register,
    Main,
}

impl View {
    /// Return the title shown in the view's border.
    ///
    pub fn title(&self) -> &'static str {
        match self {
            View::Login => "Login",
            View::Register => "Register",
            View::Main => "Ledger",
        }
    }

    /// Return true if the view hosts an input form.
    ///
    pub fn has_form(&self) -> bool {
        matches!(self, View::Login | View::Register)
    }
}

/// Specifying the sections reachable from the main view.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Section {
    CustomerList,
    AddCustomer,
    EditCustomer,
    TransactionList,
    AddTransaction,
    EditTransaction,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::CustomerList,
        Section::AddCustomer,
        Section::EditCustomer,
        Section::TransactionList,
        Section::AddTransaction,
        Section::EditTransaction,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::CustomerList => "Customer Lists",
            Section::AddCustomer => "Add Customer",
            Section::EditCustomer => "Edit Customer",
            Section::TransactionList => "Transaction List",
            Section::AddTransaction => "Add Transaction",
            Section::EditTransaction => "Edit Transaction",
        }
    }
}
