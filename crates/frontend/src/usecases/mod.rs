pub mod u601_analyze_resume;
