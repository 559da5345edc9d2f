pub mod hf_inference;
