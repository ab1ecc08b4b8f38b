mod upload_staging_test;
