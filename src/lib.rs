//! Workspace root package. It carries no code; it exists so the pre-commit
//! hooks configured in the root manifest are installed for every checkout.
