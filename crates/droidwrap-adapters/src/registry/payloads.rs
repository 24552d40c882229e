//! Android WebView wrapper payloads.
//!
//! Every constant is a content pattern for one output file, carrying
//! `{{VAR}}` placeholders resolved by `RenderContext`. Leading/trailing
//! whitespace is trimmed at render time, so the literals keep comfortable
//! margins here.

/// Top-level Gradle build script. No substitutions.
pub const ROOT_BUILD_GRADLE: &str = r#"
buildscript {
    repositories {
        google()
        mavenCentral()
    }
    dependencies {
        classpath 'com.android.tools.build:gradle:8.1.1'
    }
}

allprojects {
    repositories {
        google()
        mavenCentral()
    }
}

task clean(type: Delete) {
    delete rootProject.buildDir
}
"#;

pub const SETTINGS_GRADLE: &str = r#"
include ':app'
rootProject.name = "{{APP_NAME}}"
"#;

pub const GRADLE_PROPERTIES: &str = r#"
android.useAndroidX=true
android.enableJetifier=true
org.gradle.jvmargs=-Xmx2048m -Dfile.encoding=UTF-8
android.nonTransitiveRClass=true
android.nonFinalResIds=false
"#;

/// Application module build script: every SDK/version field substitutes here.
pub const APP_BUILD_GRADLE: &str = r#"
plugins {
    id 'com.android.application'
}

android {
    compileSdk {{COMPILE_SDK}}
    namespace "{{PACKAGE_NAME}}"

    defaultConfig {
        applicationId "{{PACKAGE_NAME}}"
        minSdk {{MIN_SDK}}
        targetSdk {{TARGET_SDK}}
        versionCode {{VERSION_CODE}}
        versionName "{{VERSION_NAME}}"

        testInstrumentationRunner "androidx.test.runner.AndroidJUnitRunner"
    }

    buildTypes {
        release {
            minifyEnabled false
            proguardFiles getDefaultProguardFile('proguard-android-optimize.txt'), 'proguard-rules.pro'
        }
    }

    compileOptions {
        sourceCompatibility JavaVersion.VERSION_1_8
        targetCompatibility JavaVersion.VERSION_1_8
    }
}

dependencies {
    implementation 'androidx.appcompat:appcompat:1.6.1'
    implementation 'com.google.android.material:material:1.9.0'
    implementation 'androidx.constraintlayout:constraintlayout:2.1.4'
    implementation 'androidx.browser:browser:1.6.0'
    implementation 'com.google.androidbrowserhelper:androidbrowserhelper:2.5.0'

    testImplementation 'junit:junit:4.13.2'
    androidTestImplementation 'androidx.test.ext:junit:1.1.5'
    androidTestImplementation 'androidx.test.espresso:espresso-core:3.5.1'
}
"#;

/// Manifest with launcher activity, asset-statements reference, and the
/// server URL recorded as application metadata.
pub const ANDROID_MANIFEST: &str = r#"
<?xml version="1.0" encoding="utf-8"?>
<manifest xmlns:android="http://schemas.android.com/apk/res/android"
    xmlns:tools="http://schemas.android.com/tools">

    <uses-permission android:name="android.permission.INTERNET" />
    <uses-permission android:name="android.permission.WAKE_LOCK" />
    <uses-permission android:name="android.permission.ACCESS_NETWORK_STATE" />

    <application
        android:allowBackup="true"
        android:dataExtractionRules="@xml/data_extraction_rules"
        android:fullBackupContent="@xml/backup_rules"
        android:icon="@mipmap/ic_launcher"
        android:label="@string/app_name"
        android:roundIcon="@mipmap/ic_launcher_round"
        android:supportsRtl="true"
        android:theme="@style/Theme.{{THEME}}"
        tools:targetApi="31">

        <activity
            android:name=".MainActivity"
            android:exported="true"
            android:label="@string/app_name"
            android:theme="@style/Theme.{{THEME}}.NoActionBar">
            <intent-filter>
                <action android:name="android.intent.action.MAIN" />
                <category android:name="android.intent.category.LAUNCHER" />
            </intent-filter>
        </activity>

        <!-- Digital Asset Links for custom domain verification -->
        <meta-data
            android:name="asset_statements"
            android:value="@string/asset_statements" />

        <!-- Canonical start URL, readable by tooling -->
        <meta-data
            android:name="app.server_url"
            android:value="{{SERVER_URL}}" />

    </application>
</manifest>
"#;

/// WebView activity that loads the configured URL and keeps in-domain
/// navigation inside the app.
pub const MAIN_ACTIVITY: &str = r#"
package {{PACKAGE_NAME}};

import android.annotation.SuppressLint;
import android.os.Bundle;
import android.webkit.WebSettings;
import android.webkit.WebView;
import android.webkit.WebViewClient;
import android.webkit.WebChromeClient;
import android.webkit.PermissionRequest;

import androidx.appcompat.app.AppCompatActivity;

public class MainActivity extends AppCompatActivity {

    private WebView webView;
    private static final String APP_URL = "{{SERVER_URL}}";

    @SuppressLint("SetJavaScriptEnabled")
    @Override
    protected void onCreate(Bundle savedInstanceState) {
        super.onCreate(savedInstanceState);
        setContentView(R.layout.activity_main);

        webView = findViewById(R.id.webview);

        WebSettings webSettings = webView.getSettings();
        webSettings.setJavaScriptEnabled(true);
        webSettings.setDomStorageEnabled(true);
        webSettings.setDatabaseEnabled(true);
        webSettings.setAllowFileAccess(true);
        webSettings.setAllowContentAccess(true);
        webSettings.setMixedContentMode(WebSettings.MIXED_CONTENT_ALWAYS_ALLOW);
        webSettings.setCacheMode(WebSettings.LOAD_DEFAULT);
        webSettings.setLoadWithOverviewMode(true);
        webSettings.setUseWideViewPort(true);
        webSettings.setBuiltInZoomControls(false);
        webSettings.setDisplayZoomControls(false);
        webSettings.setSupportZoom(false);
        webSettings.setDefaultTextEncodingName("utf-8");

        webView.setWebViewClient(new WebViewClient() {
            @Override
            public boolean shouldOverrideUrlLoading(WebView view, String url) {
                // Keep in-domain navigation inside the app
                if (url.contains("{{DOMAIN}}")) {
                    view.loadUrl(url);
                    return true;
                }
                return super.shouldOverrideUrlLoading(view, url);
            }
        });

        webView.setWebChromeClient(new WebChromeClient() {
            @Override
            public void onPermissionRequest(PermissionRequest request) {
                // Grant permissions for PWA features
                request.grant(request.getResources());
            }
        });

        webView.loadUrl(APP_URL);
    }

    @Override
    public void onBackPressed() {
        if (webView.canGoBack()) {
            webView.goBack();
        } else {
            super.onBackPressed();
        }
    }

    @Override
    protected void onPause() {
        super.onPause();
        webView.onPause();
    }

    @Override
    protected void onResume() {
        super.onResume();
        webView.onResume();
    }

    @Override
    protected void onDestroy() {
        super.onDestroy();
        webView.destroy();
    }
}
"#;

pub const ACTIVITY_MAIN_LAYOUT: &str = r#"
<?xml version="1.0" encoding="utf-8"?>
<RelativeLayout xmlns:android="http://schemas.android.com/apk/res/android"
    xmlns:app="http://schemas.android.com/apk/res/auto"
    xmlns:tools="http://schemas.android.com/tools"
    android:layout_width="match_parent"
    android:layout_height="match_parent"
    tools:context=".MainActivity">

    <WebView
        android:id="@+id/webview"
        android:layout_width="match_parent"
        android:layout_height="match_parent"
        android:layout_centerInParent="true" />

</RelativeLayout>
"#;

/// Strings resource: app name plus the digital-asset-links payload used for
/// site verification against the bare domain.
pub const STRINGS_XML: &str = r#"
<?xml version="1.0" encoding="utf-8"?>
<resources>
    <string name="app_name">{{APP_NAME}}</string>
    <string name="asset_statements">
        [{
            "relation": ["delegate_permission/common.handle_all_urls"],
            "target": {
                "namespace": "web",
                "site": "https://{{DOMAIN}}"
            }
        }]
    </string>
</resources>
"#;

pub const COLORS_XML: &str = r#"
<?xml version="1.0" encoding="utf-8"?>
<resources>
    <color name="colorPrimary">#2563EB</color>
    <color name="colorPrimaryDark">#1D4ED8</color>
    <color name="colorAccent">#7C3AED</color>
    <color name="white">#FFFFFF</color>
    <color name="black">#000000</color>
</resources>
"#;

pub const THEMES_XML: &str = r#"
<resources xmlns:tools="http://schemas.android.com/tools">
    <style name="Theme.{{THEME}}" parent="Theme.Material3.DayNight">
        <item name="colorPrimary">@color/colorPrimary</item>
        <item name="colorPrimaryDark">@color/colorPrimaryDark</item>
        <item name="colorAccent">@color/colorAccent</item>
    </style>

    <style name="Theme.{{THEME}}.NoActionBar">
        <item name="windowActionBar">false</item>
        <item name="windowNoTitle">true</item>
        <item name="android:statusBarColor">@color/colorPrimary</item>
    </style>
</resources>
"#;

pub const DATA_EXTRACTION_RULES: &str = r#"
<?xml version="1.0" encoding="utf-8"?>
<data-extraction-rules>
    <cloud-backup>
        <include domain="sharedpref" path="."/>
        <exclude domain="sharedpref" path="device.xml"/>
    </cloud-backup>
    <device-transfer>
        <include domain="sharedpref" path="."/>
        <exclude domain="sharedpref" path="device.xml"/>
    </device-transfer>
</data-extraction-rules>
"#;

pub const BACKUP_RULES: &str = r#"
<?xml version="1.0" encoding="utf-8"?>
<full-backup-content>
    <exclude domain="sharedpref" path="device_prefs.xml"/>
</full-backup-content>
"#;

/// Adaptive-icon foreground vector: concentric discs with a heart mark.
pub const LAUNCHER_FOREGROUND: &str = r##"
<vector xmlns:android="http://schemas.android.com/apk/res/android"
    android:width="108dp"
    android:height="108dp"
    android:viewportWidth="108"
    android:viewportHeight="108">

  <group android:pivotX="54" android:pivotY="54">
    <path android:fillColor="#2563EB"
        android:pathData="M54,54m-45,0a45,45 0,1 1,90 0a45,45 0,1 1,-90 0"/>
    <path android:fillColor="#7C3AED"
        android:pathData="M54,54m-35,0a35,35 0,1 1,70 0a35,35 0,1 1,-70 0"/>
    <path android:fillColor="#DC2626"
        android:pathData="M54,54m-25,0a25,25 0,1 1,50 0a25,25 0,1 1,-50 0"/>
  </group>

  <path android:fillColor="#FFFFFF"
      android:pathData="M54,72L48.6,67.1C39.15,58.55 32.4,52.65 32.4,45.225C32.4,39.6 36.9,35.1 42.525,35.1C46.575,35.1 50.625,37.125 54,40.05C57.375,37.125 61.425,35.1 65.475,35.1C71.1,35.1 75.6,39.6 75.6,45.225C75.6,52.65 68.85,58.55 59.4,67.1L54,72Z"/>
</vector>
"##;

/// Adaptive-icon descriptor, shared by every density bucket.
pub const ADAPTIVE_ICON: &str = r#"
<?xml version="1.0" encoding="utf-8"?>
<adaptive-icon xmlns:android="http://schemas.android.com/apk/res/android">
    <background android:drawable="@color/colorPrimary"/>
    <foreground android:drawable="@drawable/ic_launcher_foreground"/>
</adaptive-icon>
"#;

pub const BUILD_INSTRUCTIONS: &str = r#"
# {{APP_NAME}} APK Build Instructions

## Prerequisites
1. Install Android Studio or Android Command Line Tools
2. Install Java 8 or higher
3. Set ANDROID_HOME environment variable

## Build Steps

### Option 1: Using Android Studio
1. Open Android Studio
2. Open this folder as a project
3. Wait for Gradle sync to complete
4. Go to Build > Generate Signed Bundle/APK
5. Choose APK and follow the signing wizard

### Option 2: Using Command Line
1. Navigate to this directory

2. Make gradlew executable (Linux/Mac):
   chmod +x gradlew

3. Build debug APK:
   ./gradlew assembleDebug

4. Build release APK (requires signing):
   ./gradlew assembleRelease

## Output Location
- Debug APK: app/build/outputs/apk/debug/app-debug.apk
- Release APK: app/build/outputs/apk/release/app-release.apk

## App Configuration
- App loads: {{SERVER_URL}}
- Package name: {{PACKAGE_NAME}}
- Version: {{VERSION_NAME}} ({{VERSION_CODE}})
- Target SDK: {{TARGET_SDK}}
- Min SDK: {{MIN_SDK}}

## Testing
1. Install the APK on an Android device
2. The app should automatically load {{SERVER_URL}}
3. Verify all {{APP_NAME}} features work correctly
4. Test offline behavior and app resume behavior

## Publishing
Before publishing to Google Play Store:
1. Create a release build with proper signing
2. Test thoroughly on multiple devices
3. Ensure all Google Play Store requirements are met
4. Update the version code and version name for each release
"#;
