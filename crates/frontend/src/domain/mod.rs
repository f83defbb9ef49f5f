pub mod a001_tender;
