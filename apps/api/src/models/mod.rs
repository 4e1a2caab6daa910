pub mod explain_run;
